//! # idset
//!
//! Combination of identifier collections and lower-bound search over
//! sorted sequences.
//!
//! ## Overview
//!
//! Query layers commonly resolve every criterion of a compound filter to its
//! own collection of identifiers and then need to merge them. This library
//! provides the two pieces of that work that carry real algorithmic content:
//!
//! - **Combination**: intersection (AND) or union (OR) of any number of
//!   unordered identifier collections, processed in size order
//! - **Search**: lower-bound binary search over sorted sequences and a sorted
//!   key-to-value map built on it for range-style lookups
//!
//! Every operation is a pure, synchronous function over borrowed inputs.
//! Missing data (no collections, absent collections, out-of-range queries)
//! yields an empty result or `None`, never an error.
//!
//! ## Feature Flags
//!
//! - `combine`: Set combination (`SetCombiner`, `IdentifierSet`)
//! - `search`: Lower-bound search and `SortedKeyMap`
//! - `fxhash`: Use `rustc-hash` for `IdentifierSet`
//! - `ahash`: Use `ahash` for `IdentifierSet`
//! - `rayon`: Parallel evaluation of independent filter sets
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use idset::prelude::*;
//!
//! let by_tag: Vec<Identifier> = vec![1, 2, 3];
//! let by_author: Vec<Identifier> = vec![2, 3, 4];
//! let by_date: Vec<Identifier> = vec![3, 4, 5];
//!
//! let matches = combine(&[by_tag, by_author, by_date], CombinationMode::Intersect);
//! assert_eq!(matches.into_sorted_vec(), vec![3]);
//!
//! let timestamps = [10, 20, 30, 40];
//! assert_eq!(lower_bound(&timestamps[..], &25), Some(2));
//! assert_eq!(lower_bound(&timestamps[..], &45), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public API of every enabled module.
///
/// # Usage
///
/// ```rust
/// use idset::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "combine")]
    pub use crate::combine::*;

    #[cfg(feature = "search")]
    pub use crate::search::*;
}

#[cfg(feature = "combine")]
pub mod combine;

#[cfg(feature = "search")]
pub mod search;
