//! The raw open-addressing hash table.
//!
//! This module provides [`HashTable`], the storage layer underneath
//! [`HashMap`](crate::HashMap). It is keyed by caller-supplied 64-bit hashes
//! and equality predicates rather than by key types, which makes it usable
//! for maps, sets, or interning tables alike.

use alloc::boxed::Box;
use core::fmt::Debug;

/// Capacity used by [`HashTable::new`], in logical buckets.
const DEFAULT_CAPACITY: usize = 8;

/// Load factor used by constructors that do not take one explicitly.
const DEFAULT_LOAD_FACTOR: f64 = 0.67;

fn empty_slots<V>(capacity: usize) -> Box<[Option<(u64, V)>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

/// A flat hash table using open addressing with linear probing.
///
/// All entries live in a single contiguous array of slots; capacity is always
/// a power of two so probe wraparound is a bit mask. Each occupied slot
/// caches the entry's full 64-bit hash, which lets removal and rehashing
/// recompute home buckets without consulting a hasher.
///
/// Removal is tombstone-free: deleting an entry shifts the remainder of its
/// probe chain backward to fill the gap, leaving the array indistinguishable
/// from one the entry was never inserted into. Lookup cost therefore does not
/// degrade as entries churn.
///
/// The table grows by doubling whenever an insertion would push the
/// population past `capacity * load_factor`. Growth happens before the new
/// entry is written, so the load-factor bound holds after every operation.
///
/// ## Example
///
/// ```rust
/// # use shift_hash::hash_table::HashTable;
/// #
/// # fn hash_u64(n: u64) -> u64 {
/// #     n.wrapping_mul(0x9E37_79B9_7F4A_7C15)
/// # }
/// #
/// let mut table = HashTable::with_capacity(16);
///
/// match table.entry(hash_u64(123), |&n: &u64| n == 123) {
///     shift_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(123);
///     }
///     shift_hash::hash_table::Entry::Occupied(_) => unreachable!(),
/// }
///
/// assert_eq!(table.find(hash_u64(123), |&n| n == 123), Some(&123));
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    slots: Box<[Option<(u64, V)>]>,
    populated: usize,
    load_factor: f64,
    resize_threshold: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.populated)
            .field("capacity", &self.slots.len())
            .field("load_factor", &self.load_factor)
            .field("resize_threshold", &self.resize_threshold)
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates a table with the default capacity (8) and load factor (0.67).
    pub fn new() -> Self {
        Self::with_capacity_and_load_factor(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Creates a table that can hold `capacity` logical buckets, rounded up
    /// to the next power of two, with the default load factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<i32> = HashTable::with_capacity(100);
    /// assert_eq!(table.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates a table with an explicit capacity and load factor.
    ///
    /// The capacity is rounded up to the next power of two (minimum 1). The
    /// resize threshold is `capacity * load_factor`, truncated; an insert
    /// that would push the population past it doubles the capacity first.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is not in the open interval `(0, 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<i32> = HashTable::with_capacity_and_load_factor(8, 0.67);
    /// assert_eq!(table.capacity(), 8);
    /// assert_eq!(table.resize_threshold(), 5);
    /// ```
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        assert!(
            load_factor > 0.0 && load_factor < 1.0,
            "load factor must be in (0, 1), got {load_factor}"
        );

        let capacity = capacity.max(1).next_power_of_two();
        Self {
            slots: empty_slots(capacity),
            populated: 0,
            load_factor,
            resize_threshold: Self::threshold(capacity, load_factor),
        }
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of logical buckets. Always a power of two.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the load factor beyond which the table doubles its capacity.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the population at which the next insert triggers a resize.
    ///
    /// This is `capacity * load_factor`, truncated, and is recomputed
    /// whenever the capacity changes.
    pub fn resize_threshold(&self) -> usize {
        self.resize_threshold
    }

    /// Returns a reference to the value matching `hash` and `eq`, if any.
    ///
    /// Probes linearly from the hash's home bucket; the stored hash is
    /// compared before the predicate runs. The probe stops at the first
    /// empty slot, which (thanks to backward-shift removal) always marks the
    /// end of the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::hash_table::HashTable;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     n.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(16);
    /// table.entry(hash_u64(7), |&n: &u64| n == 7).or_insert(7);
    ///
    /// assert_eq!(table.find(hash_u64(7), |&n| n == 7), Some(&7));
    /// assert_eq!(table.find(hash_u64(8), |&n| n == 8), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = self.find_index(hash, &eq)?;
        self.slots[index].as_ref().map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value matching `hash` and `eq`.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.find_index(hash, &eq)?;
        self.slots[index].as_mut().map(|(_, value)| value)
    }

    /// Gets the entry matching `hash` and `eq` for in-place manipulation.
    ///
    /// If no entry matches, the returned [`VacantEntry`] points at the empty
    /// slot where an insertion would land. The table grows before the vacant
    /// entry is handed out if an insertion would exceed the resize
    /// threshold, so the slot stays valid for the entry's lifetime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::hash_table::HashTable;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     n.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(16);
    /// table.entry(hash_u64(1), |&n: &u64| n == 1).or_insert(1);
    ///
    /// match table.entry(hash_u64(1), |&n| n == 1) {
    ///     shift_hash::hash_table::Entry::Occupied(entry) => assert_eq!(entry.get(), &1),
    ///     shift_hash::hash_table::Entry::Vacant(_) => unreachable!(),
    /// }
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        if let Some(index) = self.find_index(hash, &eq) {
            return Entry::Occupied(OccupiedEntry { table: self, index });
        }

        if self.populated + 1 > self.resize_threshold {
            self.grow();
        }

        let index = self.find_insert_slot(hash);
        Entry::Vacant(VacantEntry {
            table: self,
            hash,
            index,
        })
    }

    /// Removes and returns the value matching `hash` and `eq`.
    ///
    /// After the slot is cleared, the remainder of the probe chain is
    /// shifted backward so every surviving entry stays reachable from its
    /// home bucket. Returns `None` (and mutates nothing) if no entry
    /// matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::hash_table::HashTable;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     n.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(16);
    /// table.entry(hash_u64(42), |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(hash_u64(42), |&n| n == 42), Some(42));
    /// assert_eq!(table.remove(hash_u64(42), |&n| n == 42), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        if self.populated == 0 {
            return None;
        }

        let index = self.find_index(hash, &eq)?;
        Some(self.remove_at(index))
    }

    /// Removes all entries, preserving the allocated capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.populated = 0;
    }

    /// Shrinks the table to the smallest power-of-two capacity whose resize
    /// threshold still admits the current population.
    ///
    /// Useful for reclaiming space after many removals. Does nothing if the
    /// table is already at that capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::hash_table::HashTable;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     n.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(1024);
    /// table.entry(hash_u64(1), |&n: &u64| n == 1).or_insert(1);
    ///
    /// table.compact();
    /// assert_eq!(table.capacity(), 2);
    /// ```
    pub fn compact(&mut self) {
        let new_capacity = Self::capacity_for(self.populated, self.load_factor);
        if new_capacity < self.slots.len() {
            self.rehash(new_capacity);
        }
    }

    /// Reserves capacity for at least `additional` more entries.
    ///
    /// After calling `reserve`, inserting `additional` entries will not
    /// trigger a resize. Does nothing if the threshold already admits them.
    pub fn reserve(&mut self, additional: usize) {
        let required = self
            .populated
            .checked_add(additional)
            .expect("capacity overflow");
        if required <= self.resize_threshold {
            return;
        }

        let mut new_capacity = self.slots.len();
        while Self::threshold(new_capacity, self.load_factor) < required {
            new_capacity = new_capacity.checked_mul(2).expect("capacity overflow");
        }
        self.rehash(new_capacity);
    }

    /// Returns an iterator over all values, in array-slot order.
    ///
    /// Slot order is unrelated to insertion order and may change after any
    /// resize.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// Returns an iterator over all values with mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            slots: self.slots.iter_mut(),
        }
    }

    /// Returns an iterator that removes and yields every value.
    ///
    /// The table is empty afterwards, even if the iterator is dropped before
    /// being exhausted. Capacity is preserved.
    pub fn drain(&mut self) -> Drain<'_, V> {
        Drain {
            table: self,
            index: 0,
        }
    }

    /// Returns a cursor over the live entries that supports removal.
    ///
    /// The cursor visits every entry exactly once, even when entries are
    /// removed through it: removal runs the same backward-shift chain repair
    /// as [`remove`](Self::remove), and the traversal order is chosen so the
    /// repair only ever moves already-visited entries.
    ///
    /// The cursor borrows the table mutably, so the table cannot be resized
    /// (or otherwise touched) while it is alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::hash_table::HashTable;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     n.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(16);
    /// for n in 0..8u64 {
    ///     table.entry(hash_u64(n), |&v: &u64| v == n).or_insert(n);
    /// }
    ///
    /// let mut cursor = table.cursor_mut();
    /// while let Some(&mut value) = cursor.next() {
    ///     if value % 2 == 0 {
    ///         cursor.remove();
    ///     }
    /// }
    ///
    /// assert_eq!(table.len(), 4);
    /// ```
    pub fn cursor_mut(&mut self) -> CursorMut<'_, V> {
        let capacity = self.slots.len();

        // Start just past a chain boundary so backward shifts during the
        // walk never move an unvisited entry across the starting point. The
        // load-factor bound guarantees at least one empty slot exists.
        let stop = if self.slots[capacity - 1].is_some() {
            self.slots
                .iter()
                .position(|slot| slot.is_none())
                .unwrap_or(capacity)
        } else {
            capacity
        };

        CursorMut {
            pos: stop + capacity,
            stop,
            valid: false,
            table: self,
        }
    }

    /// Retains only the values for which the predicate returns `true`.
    ///
    /// Removed values go through the same chain repair as
    /// [`remove`](Self::remove).
    pub fn retain(&mut self, mut f: impl FnMut(&mut V) -> bool) {
        let mut cursor = self.cursor_mut();
        while let Some(value) = cursor.next() {
            if !f(value) {
                cursor.remove();
            }
        }
    }

    /// Maps a hash to its home bucket.
    ///
    /// The upper bits are XOR-folded into the lower bits before masking,
    /// which improves distribution when the capacity is a small power of two
    /// and the hash's entropy sits in its high bits.
    #[inline(always)]
    fn bucket_of(hash: u64, mask: usize) -> usize {
        let folded = hash ^ (hash >> 16);
        folded as usize & mask
    }

    /// Linear-probe successor: one logical bucket forward, with wraparound.
    #[inline(always)]
    fn next_index(mask: usize, index: usize) -> usize {
        (index + 1) & mask
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    fn threshold(capacity: usize, load_factor: f64) -> usize {
        (capacity as f64 * load_factor) as usize
    }

    /// Smallest power-of-two capacity whose threshold admits `len` entries.
    fn capacity_for(len: usize, load_factor: f64) -> usize {
        let mut capacity = 1;
        while Self::threshold(capacity, load_factor) < len {
            capacity = capacity.checked_mul(2).expect("capacity overflow");
        }
        capacity
    }

    /// Probes for the slot holding the entry matching `hash` and `eq`.
    ///
    /// Terminates at the first empty slot: probe-chain contiguity means an
    /// empty slot proves the entry is absent.
    fn find_index(&self, hash: u64, eq: &impl Fn(&V) -> bool) -> Option<usize> {
        let mask = self.mask();
        let mut index = Self::bucket_of(hash, mask);

        while let Some((stored, value)) = &self.slots[index] {
            if *stored == hash && eq(value) {
                return Some(index);
            }
            index = Self::next_index(mask, index);
        }

        None
    }

    /// Probes for the first empty slot on `hash`'s chain.
    ///
    /// Only called when the population is strictly below the capacity, so
    /// the probe always terminates.
    fn find_insert_slot(&self, hash: u64) -> usize {
        let mask = self.mask();
        let mut index = Self::bucket_of(hash, mask);

        while self.slots[index].is_some() {
            index = Self::next_index(mask, index);
        }

        index
    }

    fn grow(&mut self) {
        let new_capacity = self.slots.len().checked_mul(2).expect("capacity overflow");
        self.rehash(new_capacity);
    }

    /// Replaces the backing array and re-probes every entry into it.
    ///
    /// Nothing is ever removed from the fresh array during the rehash, so
    /// plain insert probing preserves chain contiguity.
    fn rehash(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity.is_power_of_two());
        debug_assert!(Self::threshold(new_capacity, self.load_factor) >= self.populated);

        let old = core::mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.resize_threshold = Self::threshold(new_capacity, self.load_factor);

        let mask = self.mask();
        for (hash, value) in old.into_vec().into_iter().flatten() {
            let mut index = Self::bucket_of(hash, mask);
            while self.slots[index].is_some() {
                index = Self::next_index(mask, index);
            }
            self.slots[index] = Some((hash, value));
        }
    }

    /// Clears the slot at `index` and repairs the probe chain behind it.
    fn remove_at(&mut self, index: usize) -> V {
        let (_, value) = self.slots[index].take().expect("slot must be occupied");
        self.populated -= 1;
        self.backward_shift(index);
        value
    }

    /// Backward-shift compaction rooted at the freed slot.
    ///
    /// Scans forward from `free` until the first empty slot. Each entry
    /// encountered is moved down into the free slot iff the free slot lies
    /// cyclically between the entry's home bucket and its current slot, so
    /// the move never skips an entry past its own home in probe order. The
    /// freed slot then becomes the entry's old slot and the scan continues.
    ///
    /// Every removal runs this exactly once and scans the entire contiguous
    /// run; both are required for chain contiguity to survive deletions.
    fn backward_shift(&mut self, mut free: usize) {
        let mask = self.mask();
        let mut index = free;

        loop {
            index = Self::next_index(mask, index);
            let home = match &self.slots[index] {
                None => break,
                Some((hash, _)) => Self::bucket_of(*hash, mask),
            };

            let reachable = if index < home {
                home <= free || free <= index
            } else {
                home <= free && free <= index
            };

            if reachable {
                self.slots[free] = self.slots[index].take();
                free = index;
            }
        }
    }
}

impl<V> IntoIterator for HashTable<V> {
    type IntoIter = IntoIter<V>;
    type Item = V;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter {
            slots: self.slots.into_vec().into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type IntoIter = Iter<'a, V>;
    type Item = &'a V;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut HashTable<V> {
    type IntoIter = IterMut<'a, V>;
    type Item = &'a mut V;

    fn into_iter(self) -> IterMut<'a, V> {
        self.iter_mut()
    }
}

/// A view into a single entry in the table, which may be vacant or occupied.
///
/// Constructed by the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, V>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from `default` if the entry is vacant and
    /// returns a mutable reference to the value.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value.
    pub fn get(&self) -> &V {
        self.table.slots[self.index]
            .as_ref()
            .map(|(_, value)| value)
            .expect("occupied entry points at an occupied slot")
    }

    /// Gets a mutable reference to the value.
    pub fn get_mut(&mut self) -> &mut V {
        self.table.slots[self.index]
            .as_mut()
            .map(|(_, value)| value)
            .expect("occupied entry points at an occupied slot")
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        self.table.slots[self.index]
            .as_mut()
            .map(|(_, value)| value)
            .expect("occupied entry points at an occupied slot")
    }

    /// Replaces the value, returning the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry from the table and returns the value.
    ///
    /// The probe chain is repaired exactly as in [`HashTable::remove`].
    pub fn remove(self) -> V {
        self.table.remove_at(self.index)
    }
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
    index: usize,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts a value into the slot and returns a mutable reference to it.
    ///
    /// The table has already grown (if needed) when the vacant entry was
    /// created, so this never resizes.
    pub fn insert(self, value: V) -> &'a mut V {
        self.table.slots[self.index] = Some((self.hash, value));
        self.table.populated += 1;
        self.table.slots[self.index]
            .as_mut()
            .map(|(_, value)| value)
            .expect("slot was just filled")
    }
}

/// An iterator over the values of a [`HashTable`].
pub struct Iter<'a, V> {
    slots: core::slice::Iter<'a, Option<(u64, V)>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .find_map(|slot| slot.as_ref().map(|(_, value)| value))
    }
}

/// A mutable iterator over the values of a [`HashTable`].
pub struct IterMut<'a, V> {
    slots: core::slice::IterMut<'a, Option<(u64, V)>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .find_map(|slot| slot.as_mut().map(|(_, value)| value))
    }
}

/// An owning iterator over the values of a [`HashTable`].
pub struct IntoIter<V> {
    slots: alloc::vec::IntoIter<Option<(u64, V)>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| slot.map(|(_, value)| value))
    }
}

/// A draining iterator over the values of a [`HashTable`].
///
/// Created by [`HashTable::drain`]. Dropping the iterator removes any values
/// it has not yet yielded.
pub struct Drain<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.table.slots.len() {
            let slot = self.table.slots[self.index].take();
            self.index += 1;
            if let Some((_, value)) = slot {
                self.table.populated -= 1;
                return Some(value);
            }
        }

        None
    }
}

impl<V> Drop for Drain<'_, V> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

/// A cursor over the live entries of a [`HashTable`] supporting removal.
///
/// Created by [`HashTable::cursor_mut`]. The cursor snapshots a stop
/// boundary at creation and walks slot positions downward with wraparound
/// masking; raw slot indices are never exposed.
///
/// [`next`](CursorMut::next) yields a mutable reference to each live value
/// in turn, returning `None` once the walk is exhausted.
/// [`remove`](CursorMut::remove) deletes the most recently yielded entry;
/// calling it before a successful `next`, or twice for the same entry,
/// removes nothing and returns `None`.
pub struct CursorMut<'a, V> {
    table: &'a mut HashTable<V>,
    pos: usize,
    stop: usize,
    valid: bool,
}

impl<V> CursorMut<'_, V> {
    /// Advances to the next live entry and returns its value.
    pub fn next(&mut self) -> Option<&mut V> {
        let mask = self.table.mask();
        self.valid = false;

        while self.pos > self.stop {
            self.pos -= 1;
            let index = self.pos & mask;
            if self.table.slots[index].is_some() {
                self.valid = true;
                return self.table.slots[index].as_mut().map(|(_, value)| value);
            }
        }

        None
    }

    /// Removes the entry most recently yielded by [`next`](Self::next).
    ///
    /// Runs the same backward-shift chain repair as a direct
    /// [`HashTable::remove`]. Returns `None` without mutating anything if
    /// there is no valid entry to remove.
    pub fn remove(&mut self) -> Option<V> {
        if !self.valid {
            return None;
        }
        self.valid = false;

        let index = self.pos & self.table.mask();
        Some(self.table.remove_at(index))
    }
}
