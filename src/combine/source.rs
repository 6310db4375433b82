//! Read-only identifier collections accepted by the combiner.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::BuildHasher;

use super::Identifier;
use super::IdentifierSet;

/// A read-only collection of identifiers that can be combined.
///
/// Implementors never need to be sorted or deduplicated. The combiner only
/// reads a source for the duration of one call and never mutates it.
///
/// `Option<S>` is a source in which `None` stands for an absent collection;
/// it is indistinguishable from an empty one.
///
/// # Examples
///
/// ```rust
/// use idset::combine::IdentifierSource;
///
/// let present: Option<Vec<u32>> = Some(vec![1, 1, 2]);
/// let absent: Option<Vec<u32>> = None;
///
/// assert_eq!(present.identifier_count(), 3);
/// assert_eq!(absent.identifier_count(), 0);
/// assert_eq!(absent.identifiers().count(), 0);
/// ```
pub trait IdentifierSource {
    /// Returns the number of elements, duplicates included.
    ///
    /// This is the size used to rank collections before combining them.
    fn identifier_count(&self) -> usize;

    /// Returns an iterator over the elements, in the collection's own order.
    fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_;

    /// Returns `true` if the collection holds no identifiers.
    #[inline]
    fn has_no_identifiers(&self) -> bool {
        self.identifier_count() == 0
    }
}

impl IdentifierSource for [Identifier] {
    #[inline]
    fn identifier_count(&self) -> usize {
        self.len()
    }

    fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.iter().copied()
    }
}

impl<const N: usize> IdentifierSource for [Identifier; N] {
    #[inline]
    fn identifier_count(&self) -> usize {
        N
    }

    fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.iter().copied()
    }
}

impl IdentifierSource for Vec<Identifier> {
    #[inline]
    fn identifier_count(&self) -> usize {
        self.len()
    }

    fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.iter().copied()
    }
}

impl IdentifierSource for VecDeque<Identifier> {
    #[inline]
    fn identifier_count(&self) -> usize {
        self.len()
    }

    fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.iter().copied()
    }
}

impl<H: BuildHasher> IdentifierSource for HashSet<Identifier, H> {
    #[inline]
    fn identifier_count(&self) -> usize {
        self.len()
    }

    fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.iter().copied()
    }
}

impl IdentifierSource for BTreeSet<Identifier> {
    #[inline]
    fn identifier_count(&self) -> usize {
        self.len()
    }

    fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.iter().copied()
    }
}

impl IdentifierSource for IdentifierSet {
    #[inline]
    fn identifier_count(&self) -> usize {
        self.len()
    }

    fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.iter()
    }
}

impl<S: IdentifierSource + ?Sized> IdentifierSource for &S {
    #[inline]
    fn identifier_count(&self) -> usize {
        (**self).identifier_count()
    }

    fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        (**self).identifiers()
    }
}

impl<S: IdentifierSource> IdentifierSource for Option<S> {
    #[inline]
    fn identifier_count(&self) -> usize {
        self.as_ref().map_or(0, IdentifierSource::identifier_count)
    }

    fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.iter().flat_map(|source| source.identifiers())
    }
}
