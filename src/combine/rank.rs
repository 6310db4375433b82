//! Size ranking of input collections.
//!
//! A ranking lives for a single combination and is dropped with it. Filter
//! lists are short, so the ranks are kept inline up to [`INLINE_RANKS`]
//! entries and only spill to the heap for unusually wide queries.

use smallvec::SmallVec;

use super::IdentifierSource;

/// Number of ranks stored without heap allocation.
pub(crate) const INLINE_RANKS: usize = 16;

/// Position of a collection in the caller's list, paired with its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SizeRank {
    pub(crate) position: usize,
    pub(crate) size: usize,
}

/// Ranks of a whole input list, ascending by size.
pub(crate) type SizeRanking = SmallVec<[SizeRank; INLINE_RANKS]>;

/// Ranks `collections` by ascending element count.
///
/// The sort is stable: collections of equal size keep their input order.
pub(crate) fn rank_by_size<S: IdentifierSource>(collections: &[S]) -> SizeRanking {
    let mut ranking: SizeRanking = collections
        .iter()
        .enumerate()
        .map(|(position, collection)| SizeRank {
            position,
            size: collection.identifier_count(),
        })
        .collect();
    ranking.sort_by_key(|rank| rank.size);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::Identifier;
    use rstest::rstest;

    fn positions(ranking: &SizeRanking) -> Vec<usize> {
        ranking.iter().map(|rank| rank.position).collect()
    }

    #[rstest]
    fn test_empty_input_has_empty_ranking() {
        let collections: Vec<Vec<Identifier>> = Vec::new();
        assert!(rank_by_size(&collections).is_empty());
    }

    #[rstest]
    fn test_ranks_ascending_by_size() {
        let collections: Vec<Vec<Identifier>> = vec![vec![1, 2, 3], vec![1], vec![1, 2]];
        let ranking = rank_by_size(&collections);
        assert_eq!(positions(&ranking), vec![1, 2, 0]);
        assert_eq!(
            ranking.iter().map(|rank| rank.size).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[rstest]
    fn test_equal_sizes_keep_input_order() {
        let collections: Vec<Vec<Identifier>> = vec![vec![9, 9], vec![1], vec![5, 6], vec![2]];
        assert_eq!(positions(&rank_by_size(&collections)), vec![1, 3, 0, 2]);
    }

    #[rstest]
    fn test_absent_collections_rank_as_empty() {
        let collections: Vec<Option<Vec<Identifier>>> = vec![Some(vec![1]), None];
        let ranking = rank_by_size(&collections);
        assert_eq!(ranking[0], SizeRank { position: 1, size: 0 });
    }

    #[rstest]
    fn test_wide_input_spills_beyond_inline_capacity() {
        let collections: Vec<Vec<Identifier>> = (0..INLINE_RANKS + 4)
            .rev()
            .map(|size| vec![0; size])
            .collect();
        let ranking = rank_by_size(&collections);
        assert!(ranking.spilled());
        assert_eq!(ranking.first().map(|rank| rank.size), Some(0));
        assert_eq!(ranking.last().map(|rank| rank.size), Some(INLINE_RANKS + 3));
    }
}
