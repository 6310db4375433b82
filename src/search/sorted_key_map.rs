//! Sorted key-to-value map with lower-bound lookups.
//!
//! [`SortedKeyMap`] stores keys and values in two parallel vectors kept in
//! ascending key order. Every lookup goes through [`lower_bound`], which
//! makes range-style queries ("everything from key `k` on") a single binary
//! search followed by a slice walk.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `get`              | O(log n)   |
//! | `lower_bound_key`  | O(log n)   |
//! | `range_from`       | O(log n)   |
//! | `insert`           | O(n)       |
//! | `remove`           | O(n)       |
//! | `from_iter`        | O(n log n) |

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use super::lower_bound;

/// A map whose entries are kept sorted by key.
///
/// # Examples
///
/// ```rust
/// use idset::search::SortedKeyMap;
///
/// let map: SortedKeyMap<u32, &str> =
///     [(30, "c"), (10, "a"), (20, "b")].into_iter().collect();
///
/// assert_eq!(map.keys(), &[10, 20, 30]);
/// assert_eq!(map.lower_bound_key(&15), Some(1));
///
/// let tail: Vec<(&u32, &&str)> = map.range_from(&15).collect();
/// assert_eq!(tail, vec![(&20, &"b"), (&30, &"c")]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SortedKeyMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> SortedKeyMap<K, V> {
    /// Creates an empty map.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the keys in ascending order.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Returns the values in ascending key order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Returns the smallest key.
    #[inline]
    #[must_use]
    pub fn first_key(&self) -> Option<&K> {
        self.keys.first()
    }

    /// Returns the largest key.
    #[inline]
    #[must_use]
    pub fn last_key(&self) -> Option<&K> {
        self.keys.last()
    }

    /// Returns the entry at `index` in key order.
    #[inline]
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<(&K, &V)> {
        Some((self.keys.get(index)?, self.values.get(index)?))
    }

    /// Returns an iterator over all entries in ascending key order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedKeyMapIterator<'_, K, V> {
        self.iter_from(0)
    }

    fn iter_from(&self, start: usize) -> SortedKeyMapIterator<'_, K, V> {
        let start = start.min(self.len());
        SortedKeyMapIterator {
            inner: self.keys[start..].iter().zip(self.values[start..].iter()),
        }
    }
}

impl<K: Ord, V> SortedKeyMap<K, V> {
    /// Returns the index of the first key not less than `key`.
    ///
    /// Returns `None` if the map is empty or `key` is greater than every key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idset::search::SortedKeyMap;
    ///
    /// let map: SortedKeyMap<i32, ()> =
    ///     [10, 20, 30, 40].into_iter().map(|key| (key, ())).collect();
    ///
    /// assert_eq!(map.lower_bound_key(&5), Some(0));
    /// assert_eq!(map.lower_bound_key(&25), Some(2));
    /// assert_eq!(map.lower_bound_key(&45), None);
    /// ```
    #[must_use]
    pub fn lower_bound_key(&self, key: &K) -> Option<usize> {
        lower_bound(&self.keys, key)
    }

    /// Returns the entries whose key is not less than `key`, in key order.
    #[must_use]
    pub fn range_from(&self, key: &K) -> SortedKeyMapIterator<'_, K, V> {
        let start = self.lower_bound_key(key).unwrap_or(self.len());
        self.iter_from(start)
    }

    /// Returns `true` if the map has an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.position_of(key).is_some()
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.values.get(self.position_of(key)?)
    }

    /// Inserts `value` under `key`, keeping keys sorted.
    ///
    /// Returns the value previously stored for `key`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idset::search::SortedKeyMap;
    ///
    /// let mut map = SortedKeyMap::new();
    /// assert_eq!(map.insert(2, "two"), None);
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(2, "TWO"), Some("two"));
    /// assert_eq!(map.keys(), &[1, 2]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.lower_bound_key(&key) {
            Some(index) if self.keys[index] == key => {
                Some(std::mem::replace(&mut self.values[index], value))
            }
            Some(index) => {
                self.keys.insert(index, key);
                self.values.insert(index, value);
                None
            }
            None => {
                self.keys.push(key);
                self.values.push(value);
                None
            }
        }
    }

    /// Removes the entry for `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.position_of(key)?;
        self.keys.remove(index);
        Some(self.values.remove(index))
    }

    fn position_of(&self, key: &K) -> Option<usize> {
        self.lower_bound_key(key)
            .filter(|&index| self.keys[index] == *key)
    }
}

impl<K, V> Default for SortedKeyMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SortedKeyMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedKeyMap<K, V> {
    /// Builds a map from unordered entries. For repeated keys the last value
    /// wins.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries: Vec<(K, V)> = iter.into_iter().collect();
        entries.sort_by(|left, right| left.0.cmp(&right.0));

        let mut map = Self::with_capacity(entries.len());
        for (key, value) in entries {
            if map.keys.last() == Some(&key) {
                if let Some(last) = map.values.last_mut() {
                    *last = value;
                }
            } else {
                map.keys.push(key);
                map.values.push(value);
            }
        }
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for SortedKeyMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the entries of a [`SortedKeyMap`] in ascending key order.
#[derive(Clone)]
pub struct SortedKeyMapIterator<'a, K, V> {
    inner: std::iter::Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>,
}

impl<'a, K, V> Iterator for SortedKeyMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for SortedKeyMapIterator<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for SortedKeyMapIterator<'_, K, V> {}

impl<K, V> FusedIterator for SortedKeyMapIterator<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a SortedKeyMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = SortedKeyMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(SortedKeyMap<u32, u32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for SortedKeyMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct SortedKeyMapVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for SortedKeyMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    type Value = SortedKeyMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries: Vec<(K, V)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(entries.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for SortedKeyMap<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(SortedKeyMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> SortedKeyMap<i32, &'static str> {
        [(40, "d"), (10, "a"), (30, "c"), (20, "b")]
            .into_iter()
            .collect()
    }

    #[rstest]
    fn test_new_is_empty() {
        let map: SortedKeyMap<i32, i32> = SortedKeyMap::new();
        assert!(map.is_empty());
        assert_eq!(map.first_key(), None);
        assert_eq!(map.lower_bound_key(&0), None);
        assert_eq!(map.range_from(&0).count(), 0);
    }

    #[rstest]
    fn test_from_iter_sorts_keys() {
        let map = sample();
        assert_eq!(map.keys(), &[10, 20, 30, 40]);
        assert_eq!(map.values(), &["a", "b", "c", "d"]);
        assert_eq!(map.first_key(), Some(&10));
        assert_eq!(map.last_key(), Some(&40));
    }

    #[rstest]
    fn test_from_iter_last_duplicate_wins() {
        let map: SortedKeyMap<i32, &str> = [(1, "first"), (2, "x"), (1, "second")]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1), Some(&"second"));
    }

    #[rstest]
    #[case(5, Some(0))]
    #[case(10, Some(0))]
    #[case(25, Some(2))]
    #[case(40, Some(3))]
    #[case(45, None)]
    fn test_lower_bound_key(#[case] key: i32, #[case] expected: Option<usize>) {
        assert_eq!(sample().lower_bound_key(&key), expected);
    }

    #[rstest]
    #[case(5, vec![10, 20, 30, 40])]
    #[case(20, vec![20, 30, 40])]
    #[case(21, vec![30, 40])]
    #[case(40, vec![40])]
    #[case(41, vec![])]
    fn test_range_from(#[case] key: i32, #[case] expected: Vec<i32>) {
        let map = sample();
        let keys: Vec<i32> = map.range_from(&key).map(|(key, _)| *key).collect();
        assert_eq!(keys, expected);
    }

    #[rstest]
    fn test_get_only_matches_exact_keys() {
        let map = sample();
        assert_eq!(map.get(&30), Some(&"c"));
        assert_eq!(map.get(&25), None);
        assert_eq!(map.get(&99), None);
        assert!(map.contains_key(&10));
        assert!(!map.contains_key(&11));
    }

    #[rstest]
    fn test_insert_keeps_order_and_replaces() {
        let mut map = sample();
        assert_eq!(map.insert(25, "bc"), None);
        assert_eq!(map.insert(50, "e"), None);
        assert_eq!(map.insert(0, "z"), None);
        assert_eq!(map.insert(25, "BC"), Some("bc"));
        assert_eq!(map.keys(), &[0, 10, 20, 25, 30, 40, 50]);
        assert_eq!(map.get(&25), Some(&"BC"));
    }

    #[rstest]
    fn test_remove() {
        let mut map = sample();
        assert_eq!(map.remove(&20), Some("b"));
        assert_eq!(map.remove(&20), None);
        assert_eq!(map.remove(&21), None);
        assert_eq!(map.keys(), &[10, 30, 40]);
        assert_eq!(map.values(), &["a", "c", "d"]);
    }

    #[rstest]
    fn test_entry_at_and_iteration() {
        let map = sample();
        assert_eq!(map.entry_at(1), Some((&20, &"b")));
        assert_eq!(map.entry_at(4), None);
        assert_eq!(map.iter().len(), 4);
        assert_eq!(map.iter().next_back(), Some((&40, &"d")));
        assert_eq!((&map).into_iter().count(), 4);
    }

    #[rstest]
    fn test_extend_inserts_each_entry() {
        let mut map = sample();
        map.extend([(15, "ab"), (10, "A")]);
        assert_eq!(map.keys(), &[10, 15, 20, 30, 40]);
        assert_eq!(map.get(&10), Some(&"A"));
    }

    #[rstest]
    fn test_debug_lists_entries_in_order() {
        let map: SortedKeyMap<i32, i32> = [(2, 20), (1, 10)].into_iter().collect();
        assert_eq!(format!("{map:?}"), "{1: 10, 2: 20}");
    }
}
