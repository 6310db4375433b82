//! Multi-way intersection and union.

use super::CombinationMode;
use super::IdentifierSet;
use super::IdentifierSource;
use super::rank::rank_by_size;

/// Combines `collections` into their intersection or union.
///
/// - No collections: the result is empty.
/// - One collection: the result is a copy of it with duplicates collapsed.
///   It never aliases the caller's collection.
/// - Two or more: see [`intersect_all`] and [`union_all`].
///
/// Inputs are only read, and only for the duration of the call. Nothing is
/// ever signalled as an error: absent or empty inputs simply shrink the
/// result.
///
/// # Complexity
///
/// O(k log k + n) where k is the number of collections and n their total
/// element count.
///
/// # Examples
///
/// ```rust
/// use idset::combine::{CombinationMode, combine};
///
/// let filters: [Vec<u32>; 3] = [vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]];
///
/// let all = combine(&filters, CombinationMode::Intersect);
/// assert_eq!(all.into_sorted_vec(), vec![3]);
///
/// let any = combine(&filters, CombinationMode::Union);
/// assert_eq!(any.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
///
/// let none: [Vec<u32>; 0] = [];
/// assert!(combine(&none, CombinationMode::Union).is_empty());
/// ```
pub fn combine<S: IdentifierSource>(collections: &[S], mode: CombinationMode) -> IdentifierSet {
    match collections {
        [] => IdentifierSet::new(),
        [single] => IdentifierSet::from_source(single),
        _ => match mode {
            CombinationMode::Intersect => intersect_ranked(collections),
            CombinationMode::Union => union_ranked(collections),
        },
    }
}

/// Returns the identifiers present in every collection.
///
/// If any collection is empty the result is empty and no collection is
/// read. Otherwise the smallest collection seeds the result, which is then
/// restricted by each larger collection in ascending size order. As soon as
/// the partial result becomes empty the remaining collections are skipped.
///
/// # Examples
///
/// ```rust
/// use idset::combine::intersect_all;
///
/// let filters: [&[u32]; 3] = [&[1, 2, 3], &[], &[3]];
/// assert!(intersect_all(&filters).is_empty());
/// ```
pub fn intersect_all<S: IdentifierSource>(collections: &[S]) -> IdentifierSet {
    combine(collections, CombinationMode::Intersect)
}

/// Returns every distinct identifier of any collection.
///
/// The largest collection seeds the result and the others are merged into
/// it in descending size order.
///
/// # Examples
///
/// ```rust
/// use idset::combine::union_all;
///
/// let filters: [&[u32]; 3] = [&[1, 2], &[3, 4], &[2, 3]];
/// assert_eq!(union_all(&filters).into_sorted_vec(), vec![1, 2, 3, 4]);
/// ```
pub fn union_all<S: IdentifierSource>(collections: &[S]) -> IdentifierSet {
    combine(collections, CombinationMode::Union)
}

fn intersect_ranked<S: IdentifierSource>(collections: &[S]) -> IdentifierSet {
    if collections.iter().any(IdentifierSource::has_no_identifiers) {
        return IdentifierSet::new();
    }

    let ranking = rank_by_size(collections);
    let mut ascending = ranking.iter().map(|rank| &collections[rank.position]);

    let Some(smallest) = ascending.next() else {
        return IdentifierSet::new();
    };
    let mut accumulator = IdentifierSet::from_source(smallest);

    for collection in ascending {
        accumulator.restrict_to(collection);
        if accumulator.is_empty() {
            break;
        }
    }
    accumulator
}

fn union_ranked<S: IdentifierSource>(collections: &[S]) -> IdentifierSet {
    let ranking = rank_by_size(collections);
    let mut descending = ranking.iter().rev().map(|rank| &collections[rank.position]);

    let Some(largest) = descending.next() else {
        return IdentifierSet::new();
    };
    let mut accumulator = IdentifierSet::from_source(largest);

    for collection in descending {
        accumulator.extend(collection.identifiers());
    }
    accumulator
}

/// A combiner bound to one [`CombinationMode`].
///
/// `SetCombiner` holds no state besides its mode, so it is `Copy` and can be
/// shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use idset::combine::{CombinationMode, SetCombiner};
///
/// let combiner = SetCombiner::union();
/// assert_eq!(combiner.mode(), CombinationMode::Union);
///
/// let filters: [Vec<u32>; 2] = [vec![1, 2], vec![2, 3]];
/// let result = combiner.combine(&filters);
/// assert_eq!(result.into_sorted_vec(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SetCombiner {
    mode: CombinationMode,
}

impl SetCombiner {
    /// Creates a combiner for `mode`.
    #[inline]
    #[must_use]
    pub const fn new(mode: CombinationMode) -> Self {
        Self { mode }
    }

    /// Creates an intersecting combiner.
    #[inline]
    #[must_use]
    pub const fn intersect() -> Self {
        Self::new(CombinationMode::Intersect)
    }

    /// Creates a uniting combiner.
    #[inline]
    #[must_use]
    pub const fn union() -> Self {
        Self::new(CombinationMode::Union)
    }

    /// Returns the mode this combiner applies.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> CombinationMode {
        self.mode
    }

    /// Combines `collections` under this combiner's mode.
    ///
    /// Equivalent to [`combine`] with [`SetCombiner::mode`].
    #[must_use]
    pub fn combine<S: IdentifierSource>(&self, collections: &[S]) -> IdentifierSet {
        combine(collections, self.mode)
    }

    /// Combines several independent filter sets in parallel.
    ///
    /// Each batch is combined on its own, exactly as [`SetCombiner::combine`]
    /// would. Results are returned in batch order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idset::combine::SetCombiner;
    ///
    /// let batches: Vec<Vec<Vec<u32>>> = vec![
    ///     vec![vec![1, 2, 3], vec![2, 3]],
    ///     vec![vec![4], vec![5]],
    /// ];
    /// let results = SetCombiner::intersect().combine_each(&batches);
    /// assert_eq!(results[0].to_sorted_vec(), vec![2, 3]);
    /// assert!(results[1].is_empty());
    /// ```
    #[cfg(feature = "rayon")]
    #[must_use]
    pub fn combine_each<S, B>(&self, batches: &[B]) -> Vec<IdentifierSet>
    where
        S: IdentifierSource + Sync,
        B: AsRef<[S]> + Sync,
    {
        use rayon::prelude::*;

        batches
            .par_iter()
            .map(|batch| self.combine(batch.as_ref()))
            .collect()
    }
}

static_assertions::assert_impl_all!(SetCombiner: Send, Sync, Copy);
