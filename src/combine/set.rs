//! Owned, deduplicated identifier collection.
//!
//! [`IdentifierSet`] is the accumulator and the result type of every
//! combination. It is a thin wrapper over a hash set whose hasher is chosen
//! by feature flag:
//!
//! | Features enabled | Hasher                         |
//! |------------------|--------------------------------|
//! | `fxhash`         | `rustc_hash::FxBuildHasher`    |
//! | `ahash` only     | `ahash::RandomState`           |
//! | neither          | `std` `RandomState` (SipHash)  |
//!
//! # Time Complexity
//!
//! | Operation        | Complexity         |
//! |------------------|--------------------|
//! | `insert`         | O(1) average       |
//! | `contains`       | O(1) average       |
//! | `len`            | O(1)               |
//! | `iter`           | O(n)               |
//! | `to_sorted_vec`  | O(n log n)         |

use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::iter::FusedIterator;

use super::Identifier;
use super::IdentifierSource;

/// Hasher used by [`IdentifierSet`] when the `fxhash` feature is enabled.
#[cfg(feature = "fxhash")]
pub type IdentifierHasher = rustc_hash::FxBuildHasher;

/// Hasher used by [`IdentifierSet`] when the `ahash` feature is enabled.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type IdentifierHasher = ahash::RandomState;

/// Hasher used by [`IdentifierSet`] when no fast hash feature is enabled.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type IdentifierHasher = std::collections::hash_map::RandomState;

/// A set of unique identifiers with unspecified iteration order.
///
/// Callers that need a stable order should use [`IdentifierSet::to_sorted_vec`]
/// or [`IdentifierSet::into_sorted_vec`].
///
/// # Examples
///
/// ```rust
/// use idset::combine::IdentifierSet;
///
/// let set: IdentifierSet = [3, 1, 2, 3].into_iter().collect();
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(2));
/// assert_eq!(set.to_string(), "{1, 2, 3}");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
    inner: HashSet<Identifier, IdentifierHasher>,
}

impl IdentifierSet {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set able to hold `capacity` identifiers without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, IdentifierHasher::default()),
        }
    }

    /// Returns the number of distinct identifiers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no identifiers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if `identifier` is in the set.
    #[inline]
    #[must_use]
    pub fn contains(&self, identifier: Identifier) -> bool {
        self.inner.contains(&identifier)
    }

    /// Adds `identifier` to the set.
    ///
    /// Returns `true` if the identifier was not already present.
    #[inline]
    pub fn insert(&mut self, identifier: Identifier) -> bool {
        self.inner.insert(identifier)
    }

    /// Returns an iterator over the identifiers in unspecified order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> IdentifierSetIterator<'_> {
        IdentifierSetIterator {
            inner: self.inner.iter(),
        }
    }

    /// Returns the identifiers in ascending order, leaving the set intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idset::combine::IdentifierSet;
    ///
    /// let set: IdentifierSet = [30, 10, 20].into_iter().collect();
    /// assert_eq!(set.to_sorted_vec(), vec![10, 20, 30]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<Identifier> {
        let mut identifiers: Vec<Identifier> = self.inner.iter().copied().collect();
        identifiers.sort_unstable();
        identifiers
    }

    /// Consumes the set and returns its identifiers in ascending order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<Identifier> {
        let mut identifiers: Vec<Identifier> = self.inner.into_iter().collect();
        identifiers.sort_unstable();
        identifiers
    }

    /// Builds a set from every identifier of `source`.
    pub(crate) fn from_source<S>(source: &S) -> Self
    where
        S: IdentifierSource + ?Sized,
    {
        let mut set = Self::with_capacity(source.identifier_count());
        set.extend(source.identifiers());
        set
    }

    /// Keeps only the identifiers that also occur in `source`.
    ///
    /// Walks `source` once, so the cost is linear in its element count.
    pub(crate) fn restrict_to<S>(&mut self, source: &S)
    where
        S: IdentifierSource + ?Sized,
    {
        let mut restricted = Self::with_capacity(self.len().min(source.identifier_count()));
        for identifier in source.identifiers() {
            if self.contains(identifier) {
                restricted.insert(identifier);
            }
        }
        *self = restricted;
    }
}

impl fmt::Debug for IdentifierSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.to_sorted_vec()).finish()
    }
}

impl fmt::Display for IdentifierSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (index, identifier) in self.to_sorted_vec().into_iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{identifier}")?;
        }
        formatter.write_str("}")
    }
}

impl FromIterator<Identifier> for IdentifierSet {
    fn from_iter<I: IntoIterator<Item = Identifier>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl Extend<Identifier> for IdentifierSet {
    fn extend<I: IntoIterator<Item = Identifier>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a> Extend<&'a Identifier> for IdentifierSet {
    fn extend<I: IntoIterator<Item = &'a Identifier>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().copied());
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over an [`IdentifierSet`].
#[derive(Clone)]
pub struct IdentifierSetIterator<'a> {
    inner: hash_set::Iter<'a, Identifier>,
}

impl Iterator for IdentifierSetIterator<'_> {
    type Item = Identifier;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IdentifierSetIterator<'_> {}

impl FusedIterator for IdentifierSetIterator<'_> {}

/// Owning iterator over an [`IdentifierSet`].
pub struct IdentifierSetIntoIterator {
    inner: hash_set::IntoIter<Identifier>,
}

impl Iterator for IdentifierSetIntoIterator {
    type Item = Identifier;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IdentifierSetIntoIterator {}

impl FusedIterator for IdentifierSetIntoIterator {}

impl IntoIterator for IdentifierSet {
    type Item = Identifier;
    type IntoIter = IdentifierSetIntoIterator;

    fn into_iter(self) -> Self::IntoIter {
        IdentifierSetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a IdentifierSet {
    type Item = Identifier;
    type IntoIter = IdentifierSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(IdentifierSet: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for IdentifierSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for identifier in self.to_sorted_vec() {
            seq.serialize_element(&identifier)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct IdentifierSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for IdentifierSetVisitor {
    type Value = IdentifierSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of identifiers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = IdentifierSet::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(identifier) = seq.next_element()? {
            set.insert(identifier);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IdentifierSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(IdentifierSetVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
