//! The keyed hash map.
//!
//! This module provides [`HashMap`], a `K -> V` map with a standard
//! collections-style surface, built on the raw
//! [`HashTable`](crate::hash_table::HashTable) by storing `(K, V)` pairs and
//! hashing keys through a configurable [`BuildHasher`].

use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The default hasher builder, backed by `foldhash`.
        ///
        /// Used by the hasher-less constructors such as [`HashMap::new`].
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else {
        /// Placeholder hasher builder used when the `foldhash` feature is
        /// disabled.
        ///
        /// This type is uninhabited; without `foldhash`, construct maps with
        /// [`HashMap::with_hasher`] and an explicit hasher builder.
        pub enum DefaultHashBuilder {}
    }
}

/// A hash map backed by the linear-probing [`HashTable`].
///
/// `HashMap<K, V, S>` stores key-value pairs where keys implement
/// `Hash + Eq`, using a configurable hasher builder `S`. All entries live in
/// one flat array (see [`HashTable`] for the storage details); iteration
/// order is array-slot order, unrelated to insertion order.
///
/// The map is single-threaded by construction: every mutating operation
/// takes `&mut self`, and iterators and cursors borrow the map, so it cannot
/// be resized while one is live.
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    table: HashTable<(K, V)>,
    hash_builder: S,
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug + Hash + Eq,
    V: Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty map with the default capacity (8), load factor
    /// (0.67), and hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let map: HashMap<i32, String> = HashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates an empty map that can hold `capacity` entries' buckets,
    /// rounded up to the next power of two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let map: HashMap<i32, String> = HashMap::with_capacity(100);
    /// assert_eq!(map.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    /// Creates an empty map with an explicit capacity and load factor.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is not in the open interval `(0, 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let map: HashMap<i32, i32> = HashMap::with_capacity_and_load_factor(8, 0.67);
    /// assert_eq!(map.capacity(), 8);
    /// assert_eq!(map.resize_threshold(), 5);
    /// ```
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        Self::with_capacity_load_factor_and_hasher(capacity, load_factor, S::default())
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the given hasher builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates an empty map with the specified capacity and hasher builder.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Creates an empty map with explicit capacity, load factor, and hasher
    /// builder.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is not in the open interval `(0, 1)`.
    pub fn with_capacity_load_factor_and_hasher(
        capacity: usize,
        load_factor: f64,
        hash_builder: S,
    ) -> Self {
        Self {
            table: HashTable::with_capacity_and_load_factor(capacity, load_factor),
            hash_builder,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of buckets in the map. Always a power of two.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the load factor beyond which the map doubles its capacity.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Returns the population at which the next insert triggers a resize.
    pub fn resize_threshold(&self) -> usize {
        self.table.resize_threshold()
    }

    /// Removes all entries, preserving the allocated capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.get(&1), None);
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Shrinks the map to the smallest power-of-two capacity whose resize
    /// threshold still admits the current population.
    ///
    /// Useful for reclaiming space after many removals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let mut map: HashMap<_, _> = HashMap::with_capacity(1024);
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    ///
    /// map.compact();
    /// assert_eq!(map.capacity(), 4);
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    pub fn compact(&mut self) {
        self.table.compact();
    }

    /// Reserves capacity for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key was already present its value is replaced and the old
    /// value returned; otherwise `None` is returned and the map grows by one
    /// entry (doubling its capacity first if the insert would cross the
    /// resize threshold).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.insert("b", 2), None);
    /// assert_eq!(map.insert("a", 3), Some(1));
    /// assert_eq!(map.get(&"a"), Some(&3));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(mut entry) => {
                Some(core::mem::replace(&mut entry.get_mut().1, value))
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find_mut(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the map contains the given key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if any entry holds the given value.
    ///
    /// Linear scan over the occupied slots.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// The freed slot's probe chain is repaired by backward shifting, so
    /// every other key stays reachable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if it
    /// was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k == key)
    }

    /// Gets the given key's entry in the map for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.entry(1).or_insert("a");
    /// map.entry(1).or_insert("b");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Returns an iterator over the key-value pairs, in array-slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let mut pairs: Vec<(i32, &str)> = map.iter().map(|(&k, &v)| (k, v)).collect();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the key-value pairs with mutable access to
    /// the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map with mutable access.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Returns an iterator that removes and yields all key-value pairs.
    ///
    /// The map is empty afterwards, even if the iterator is dropped before
    /// being exhausted.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Returns a cursor over the entries that supports removal mid-walk.
    ///
    /// Removal through the cursor runs the same backward-shift chain repair
    /// as [`remove`](Self::remove) and visits every entry exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// for i in 0..10 {
    ///     map.insert(i, i * 10);
    /// }
    ///
    /// let mut cursor = map.cursor_mut();
    /// while let Some((&key, _)) = cursor.next() {
    ///     if key % 2 == 0 {
    ///         cursor.remove_entry();
    ///     }
    /// }
    ///
    /// assert_eq!(map.len(), 5);
    /// assert_eq!(map.get(&2), None);
    /// assert_eq!(map.get(&3), Some(&30));
    /// ```
    pub fn cursor_mut(&mut self) -> CursorMut<'_, K, V> {
        CursorMut {
            inner: self.table.cursor_mut(),
        }
    }

    /// Retains only the entries for which the predicate returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashMap;
    /// #
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// for i in 0..10 {
    ///     map.insert(i, i);
    /// }
    ///
    /// map.retain(|&k, _| k < 3);
    /// assert_eq!(map.len(), 3);
    /// ```
    pub fn retain(&mut self, mut f: impl FnMut(&K, &mut V) -> bool) {
        self.table.retain(|(key, value)| f(key, value));
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for HashMap<K, V, S>
where
    K: Hash + Eq + Copy,
    V: Copy,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&key, &value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = IterMut<'a, K, V>;
    type Item = (&'a K, &'a mut V);

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

/// A view into a single entry in the map, which may be vacant or occupied.
///
/// Constructed by the [`entry`] method on [`HashMap`].
///
/// [`entry`]: HashMap::entry
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
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

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a
    /// mutable reference to the value.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in a [`HashMap`].
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied entry in a [`HashMap`].
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Replaces the value, returning the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }

    /// Removes the entry from the map and returns the value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry from the map and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// An iterator over the key-value pairs of a [`HashMap`].
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }
}

/// A mutable iterator over the key-value pairs of a [`HashMap`].
///
/// Keys are immutable; mutating a key would change its hash and corrupt the
/// probe chains.
pub struct IterMut<'a, K, V> {
    inner: crate::hash_table::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }
}

/// An iterator over the keys of a [`HashMap`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of a [`HashMap`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

/// A mutable iterator over the values of a [`HashMap`].
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

/// An owning iterator over the key-value pairs of a [`HashMap`].
pub struct IntoIter<K, V> {
    inner: crate::hash_table::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// A draining iterator over the key-value pairs of a [`HashMap`].
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<K, V> Drop for Drain<'_, K, V> {
    fn drop(&mut self) {
        for _ in self {}
    }
}

/// A cursor over the entries of a [`HashMap`] supporting removal mid-walk.
///
/// Created by [`HashMap::cursor_mut`]. See
/// [`hash_table::CursorMut`](crate::hash_table::CursorMut) for the
/// traversal guarantees.
pub struct CursorMut<'a, K, V> {
    inner: crate::hash_table::CursorMut<'a, (K, V)>,
}

impl<K, V> CursorMut<'_, K, V> {
    /// Advances to the next live entry and returns its key and value.
    ///
    /// Returns `None` once the walk is exhausted.
    pub fn next(&mut self) -> Option<(&K, &mut V)> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }

    /// Removes the entry most recently yielded by [`next`](Self::next).
    ///
    /// Returns `None` without mutating anything if `next` has not yielded an
    /// entry, or if that entry was already removed.
    pub fn remove_entry(&mut self) -> Option<(K, V)> {
        self.inner.remove()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn new_and_with_capacity() {
        let map: HashMap<i32, String> = HashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), 8);

        let map: HashMap<i32, String> = HashMap::with_capacity(200);
        assert_eq!(map.capacity(), 256);
        assert!(map.is_empty());
    }

    #[test]
    fn construction_parameters() {
        let map: HashMap<i32, i32> = HashMap::with_capacity_and_load_factor(8, 0.67);
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.load_factor(), 0.67);
        assert_eq!(map.resize_threshold(), 5);
    }

    #[test]
    #[should_panic(expected = "load factor must be in (0, 1)")]
    fn rejects_invalid_load_factor() {
        let _: HashMap<i32, i32> = HashMap::with_capacity_and_load_factor(8, 1.5);
    }

    #[test]
    fn insert_returns_previous_value() {
        let mut map: HashMap<_, _> = HashMap::new();

        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.insert("b", 2), None);
        assert_eq!(map.insert("a", 3), Some(1));

        assert_eq!(map.get(&"a"), Some(&3));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut map: HashMap<_, _> = HashMap::new();
        map.insert(1, "hello".to_string());

        if let Some(value) = map.get_mut(&1) {
            value.push_str(" world");
        }

        assert_eq!(map.get(&1), Some(&"hello world".to_string()));
        assert_eq!(map.get_mut(&2), None);
    }

    #[test]
    fn contains_key_and_value() {
        let mut map: HashMap<_, _> = HashMap::new();
        assert!(!map.contains_key(&1));

        map.insert(1, "value".to_string());
        assert!(map.contains_key(&1));
        assert!(!map.contains_key(&2));

        assert!(map.contains_value(&"value".to_string()));
        assert!(!map.contains_value(&"other".to_string()));
    }

    #[test]
    fn remove_and_remove_entry() {
        let mut map: HashMap<_, _> = HashMap::new();
        map.insert(1, "hello".to_string());
        map.insert(2, "world".to_string());

        assert_eq!(map.remove(&1), Some("hello".to_string()));
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key(&1));
        assert!(map.contains_key(&2));

        assert_eq!(map.remove(&1), None);
        assert_eq!(map.remove(&3), None);
        assert_eq!(map.len(), 1);

        assert_eq!(map.remove_entry(&2), Some((2, "world".to_string())));
        assert!(map.is_empty());
    }

    #[test]
    fn growth_preserves_entries() {
        let mut map: HashMap<_, _> = HashMap::with_capacity_and_load_factor(8, 0.67);
        for i in 0..6 {
            map.insert(i, format!("value_{i}"));
        }

        assert_eq!(map.capacity(), 16);
        for i in 0..6 {
            assert_eq!(map.get(&i), Some(&format!("value_{i}")));
        }
    }

    #[test]
    fn many_inserts_across_resizes() {
        let mut map: HashMap<_, _> = HashMap::new();
        for i in 0..10_000u64 {
            map.insert(i, i * 2);
        }
        assert_eq!(map.len(), 10_000);

        for i in 0..10_000u64 {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
    }

    #[test]
    fn interleaved_removal_keeps_survivors() {
        let mut map: HashMap<_, _> = HashMap::new();
        for i in 0..1000 {
            map.insert(i, i * 2);
        }

        for i in (0..1000).step_by(2) {
            assert_eq!(map.remove(&i), Some(i * 2));
        }
        assert_eq!(map.len(), 500);

        for i in (1..1000).step_by(2) {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
        for i in (0..1000).step_by(2) {
            assert_eq!(map.get(&i), None);
        }
    }

    #[test]
    fn clear_is_idempotent() {
        let mut map: HashMap<_, _> = HashMap::new();
        map.insert(1, "a");
        map.insert(2, "b");

        map.clear();
        assert_eq!(map.len(), 0);
        map.clear();
        assert_eq!(map.len(), 0);
        assert_eq!(map.get(&1), None);
        assert_eq!(map.get(&2), None);
    }

    #[test]
    fn compact_after_removals() {
        let mut map: HashMap<_, _> = HashMap::with_capacity_and_load_factor(8, 0.67);
        for i in 0..40 {
            map.insert(i, i);
        }
        let grown = map.capacity();
        assert!(grown >= 64);

        for i in 3..40 {
            map.remove(&i);
        }
        map.compact();

        assert!(map.capacity() < grown);
        assert!(map.len() <= (map.capacity() as f64 * map.load_factor()) as usize);
        for i in 0..3 {
            assert_eq!(map.get(&i), Some(&i));
        }
    }

    #[test]
    fn entry_api() {
        let mut map: HashMap<_, _> = HashMap::new();

        let value = map.entry(1).or_insert("hello".to_string());
        assert_eq!(value, &"hello".to_string());
        assert_eq!(map.len(), 1);

        let value = map.entry(1).or_insert("world".to_string());
        assert_eq!(value, &"hello".to_string());
        assert_eq!(map.len(), 1);

        map.entry(2).or_insert_with(|| "computed".to_string());
        assert_eq!(map.get(&2), Some(&"computed".to_string()));

        map.entry(1)
            .and_modify(|v| v.push_str(" world"))
            .or_insert("default".to_string());
        assert_eq!(map.get(&1), Some(&"hello world".to_string()));

        assert_eq!(map.entry(3).key(), &3);
    }

    #[test]
    fn entry_or_default() {
        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();

        map.entry(1).or_default().push(42);
        map.entry(1).or_default().push(24);
        assert_eq!(map.get(&1), Some(&vec![42, 24]));
    }

    #[test]
    fn occupied_entry_write_through() {
        let mut map: HashMap<_, _> = HashMap::new();
        map.insert(1, "hello".to_string());

        match map.entry(1) {
            Entry::Occupied(mut entry) => {
                assert_eq!(entry.key(), &1);
                assert_eq!(entry.get(), &"hello".to_string());

                let old = entry.insert("new".to_string());
                assert_eq!(old, "hello".to_string());
                assert_eq!(entry.get(), &"new".to_string());

                let (key, value) = entry.remove_entry();
                assert_eq!(key, 1);
                assert_eq!(value, "new".to_string());
            }
            Entry::Vacant(_) => panic!("expected occupied entry"),
        }

        assert!(map.is_empty());
    }

    #[test]
    fn vacant_entry_insert() {
        let mut map: HashMap<_, _> = HashMap::new();

        match map.entry(1) {
            Entry::Vacant(entry) => {
                assert_eq!(entry.key(), &1);
                let value = entry.insert("hello".to_string());
                assert_eq!(value, &"hello".to_string());
            }
            Entry::Occupied(_) => panic!("expected vacant entry"),
        }

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"hello".to_string()));
    }

    #[test]
    fn iterators_cover_all_entries() {
        let mut map: HashMap<_, _> = HashMap::new();
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());
        map.insert(3, "three".to_string());

        let pairs: std::collections::HashMap<i32, String> =
            map.iter().map(|(k, v)| (*k, v.clone())).collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.get(&1), Some(&"one".to_string()));
        assert_eq!(pairs.get(&3), Some(&"three".to_string()));

        let keys: std::collections::HashSet<i32> = map.keys().copied().collect();
        assert_eq!(keys, [1, 2, 3].into_iter().collect());

        let values: std::collections::HashSet<String> = map.values().cloned().collect();
        assert_eq!(values.len(), 3);
        assert!(values.contains("two"));
    }

    #[test]
    fn values_mut_updates_in_place() {
        let mut map: HashMap<_, _> = HashMap::new();
        for i in 0..5 {
            map.insert(i, i);
        }

        for value in map.values_mut() {
            *value *= 10;
        }

        for i in 0..5 {
            assert_eq!(map.get(&i), Some(&(i * 10)));
        }
    }

    #[test]
    fn drain_empties_the_map() {
        let mut map: HashMap<_, _> = HashMap::new();
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());

        let drained: std::collections::HashMap<i32, String> = map.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(map.is_empty());
        assert_eq!(drained.get(&1), Some(&"one".to_string()));
    }

    #[test]
    fn cursor_removal_updates_size_and_lookups() {
        let mut map: HashMap<_, _> = HashMap::new();
        for i in 0..20 {
            map.insert(i, i);
        }

        let mut cursor = map.cursor_mut();
        while let Some((&key, _)) = cursor.next() {
            if key % 2 == 0 {
                assert_eq!(cursor.remove_entry(), Some((key, key)));
            }
        }

        assert_eq!(map.len(), 10);
        for i in 0..20 {
            if i % 2 == 0 {
                assert_eq!(map.get(&i), None);
            } else {
                assert_eq!(map.get(&i), Some(&i));
            }
        }
    }

    #[test]
    fn cursor_remove_without_next_is_rejected() {
        let mut map: HashMap<_, _> = HashMap::new();
        map.insert(1, "a");

        let mut cursor = map.cursor_mut();
        assert_eq!(cursor.remove_entry(), None);
        cursor.next();
        assert_eq!(cursor.remove_entry(), Some((1, "a")));
        assert_eq!(cursor.remove_entry(), None);
    }

    #[test]
    fn retain_filters_entries() {
        let mut map: HashMap<_, _> = HashMap::new();
        for i in 0..100 {
            map.insert(i, i);
        }

        map.retain(|&k, _| k % 3 == 0);

        assert_eq!(map.len(), 34);
        assert!(map.contains_key(&0));
        assert!(map.contains_key(&99));
        assert!(!map.contains_key(&1));
    }

    #[test]
    fn extend_and_from_iterator() {
        let mut map: HashMap<i32, i32> = (0..5).map(|i| (i, i)).collect();
        assert_eq!(map.len(), 5);

        map.extend((5..10).map(|i| (i, i)));
        assert_eq!(map.len(), 10);

        for i in 0..10 {
            assert_eq!(map.get(&i), Some(&i));
        }
    }

    #[test]
    fn into_iterator_yields_owned_pairs() {
        let mut map: HashMap<_, _> = HashMap::new();
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());

        let mut pairs: Vec<(i32, String)> = map.into_iter().collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![(1, "one".to_string()), (2, "two".to_string())]
        );
    }

    #[test]
    fn string_keys() {
        let mut map: HashMap<_, _> = HashMap::new();
        map.insert("hello".to_string(), 1);
        map.insert("world".to_string(), 2);

        assert_eq!(map.get(&"hello".to_string()), Some(&1));
        assert_eq!(map.get(&"world".to_string()), Some(&2));
        assert_eq!(map.get(&"missing".to_string()), None);
    }

    #[test]
    fn debug_formats_as_map() {
        let mut map: HashMap<_, _> = HashMap::new();
        map.insert(1, 2);
        assert_eq!(format!("{map:?}"), "{1: 2}");
    }

    #[test]
    fn default_is_empty() {
        let map: HashMap<i32, String> = HashMap::default();
        assert!(map.is_empty());
    }
}
