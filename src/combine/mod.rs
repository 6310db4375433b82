//! Multi-way combination of identifier collections.
//!
//! This module merges any number of unordered identifier collections into a
//! single intersection or union:
//!
//! - [`combine`]: Combine collections under a [`CombinationMode`]
//! - [`intersect_all`] / [`union_all`]: Mode-specific entry points
//! - [`SetCombiner`]: A reusable, copyable combiner bound to one mode
//! - [`IdentifierSet`]: The owned, deduplicated result
//! - [`IdentifierSource`]: Any read-only collection that can be combined
//!
//! # Processing Order
//!
//! Inputs are ranked by element count before any work is done.
//!
//! - **Intersect** seeds from the smallest collection and restricts by each
//!   larger one in turn. An empty input, or an empty partial result, ends the
//!   computation immediately since intersection can only shrink.
//! - **Union** seeds from the largest collection and merges the smaller ones
//!   into it, so most identifiers of later collections are already present.
//!
//! The order affects cost only; every order yields the same set.
//!
//! # Absent Collections
//!
//! `Option<S>` is an [`IdentifierSource`] whose `None` behaves exactly like an
//! empty collection, so partially populated upstream results can be passed
//! through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use idset::combine::{CombinationMode, combine};
//!
//! let filters: [Vec<u32>; 3] = [vec![1, 2], vec![3, 4], vec![2, 3]];
//!
//! let any = combine(&filters, CombinationMode::Union);
//! assert_eq!(any.into_sorted_vec(), vec![1, 2, 3, 4]);
//!
//! let all = combine(&filters, CombinationMode::Intersect);
//! assert!(all.is_empty());
//!
//! // Absent filters are treated as empty
//! let partial: [Option<Vec<u32>>; 2] = [Some(vec![1, 2]), None];
//! assert!(combine(&partial, CombinationMode::Intersect).is_empty());
//! assert_eq!(combine(&partial, CombinationMode::Union).len(), 2);
//! ```

mod combiner;
mod mode;
mod rank;
mod set;
mod source;

pub use combiner::SetCombiner;
pub use combiner::combine;
pub use combiner::intersect_all;
pub use combiner::union_all;
pub use mode::CombinationMode;
pub use mode::ParseCombinationModeError;
pub use set::IdentifierHasher;
pub use set::IdentifierSet;
pub use set::IdentifierSetIntoIterator;
pub use set::IdentifierSetIterator;
pub use source::IdentifierSource;

/// An identifier exchanged between a query layer and the combiner.
///
/// Identifiers carry no meaning beyond being unique keys.
pub type Identifier = u32;
