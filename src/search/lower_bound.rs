//! Lower-bound binary search.
//!
//! The search keeps a closed window `[low, high]` over the sequence and
//! narrows it until both ends meet, then corrects a possible one-position
//! undershoot. The midpoint is computed as `low + (high - low) / 2` so that
//! it cannot overflow however long the sequence is.
//!
//! Queries past the last element have no lower bound and return `None`.
//! Queries at or below the first element return index 0.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A sorted, randomly indexable sequence.
///
/// The search functions trust the caller that the sequence is sorted in
/// ascending order. On an unsorted sequence they still terminate but the
/// returned index is meaningless.
pub trait OrderedSequence {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` past the end.
    fn element_at(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> OrderedSequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> OrderedSequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> OrderedSequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> OrderedSequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        Self::get(self, index)
    }
}

/// Returns the index of the first element not less than `value`.
///
/// Returns `None` if the sequence is empty or if `value` is greater than its
/// last element.
///
/// # Complexity
///
/// O(log n)
///
/// # Examples
///
/// ```rust
/// use idset::search::lower_bound;
///
/// let sequence = [10, 20, 30, 40];
/// assert_eq!(lower_bound(&sequence, &5), Some(0));
/// assert_eq!(lower_bound(&sequence, &10), Some(0));
/// assert_eq!(lower_bound(&sequence, &25), Some(2));
/// assert_eq!(lower_bound(&sequence, &40), Some(3));
/// assert_eq!(lower_bound(&sequence, &45), None);
///
/// let empty: [i32; 0] = [];
/// assert_eq!(lower_bound(&empty, &1), None);
/// ```
pub fn lower_bound<S>(sequence: &S, value: &S::Item) -> Option<usize>
where
    S: OrderedSequence + ?Sized,
    S::Item: Ord,
{
    lower_bound_by(sequence, |element| element.cmp(value))
}

/// Returns the index of the first element whose key is not less than `key`.
///
/// # Examples
///
/// ```rust
/// use idset::search::lower_bound_by_key;
///
/// let events = [(1, "boot"), (5, "login"), (9, "logout")];
/// assert_eq!(lower_bound_by_key(&events, &4, |event| event.0), Some(1));
/// ```
pub fn lower_bound_by_key<S, K, F>(sequence: &S, key: &K, mut extract: F) -> Option<usize>
where
    S: OrderedSequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    lower_bound_by(sequence, |element| extract(element).cmp(key))
}

/// Returns the index of the first element for which `compare` does not
/// return [`Ordering::Less`].
///
/// `compare` orders an element relative to the searched-for target, as in
/// [`slice::binary_search_by`].
///
/// # Examples
///
/// ```rust
/// use idset::search::lower_bound_by;
///
/// let words = ["apple", "banana", "cherry"];
/// assert_eq!(lower_bound_by(&words, |word| word.len().cmp(&6)), Some(1));
/// ```
pub fn lower_bound_by<S, F>(sequence: &S, mut compare: F) -> Option<usize>
where
    S: OrderedSequence + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    let last = sequence.len().checked_sub(1)?;
    if compare(sequence.element_at(last)?) == Ordering::Less {
        return None;
    }

    let mut low = 0;
    let mut high = last;
    while low < high {
        let middle = low + (high - low) / 2;
        if compare(sequence.element_at(middle)?) == Ordering::Less {
            low = middle + 1;
        } else if let Some(below) = middle.checked_sub(1) {
            high = below;
        } else {
            break;
        }
    }

    // The window may close one short of the answer.
    if compare(sequence.element_at(low)?) == Ordering::Less {
        low += 1;
    }
    Some(low)
}
