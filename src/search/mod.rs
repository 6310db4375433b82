//! Lower-bound search over sorted sequences.
//!
//! This module locates range boundaries in sorted data:
//!
//! - [`lower_bound`]: First index whose element is not less than a value
//! - [`lower_bound_by`] / [`lower_bound_by_key`]: The same with a custom
//!   ordering or a projected key
//! - [`OrderedSequence`]: Randomly indexable sequences the search runs on
//! - [`SortedKeyMap`]: A sorted key-to-value map answering "first key not
//!   less than `k`" and "every entry from `k` on"
//!
//! A missing bound is an expected outcome for range queries, so it is
//! reported as `None` rather than as an error.
//!
//! # Examples
//!
//! ```rust
//! use idset::search::{SortedKeyMap, lower_bound};
//!
//! let sorted_identifiers: Vec<u32> = vec![3, 8, 8, 15, 42];
//! assert_eq!(lower_bound(&sorted_identifiers, &8), Some(1));
//! assert_eq!(lower_bound(&sorted_identifiers, &43), None);
//!
//! let mut by_timestamp = SortedKeyMap::new();
//! by_timestamp.insert(1_700_000_300_u64, "third");
//! by_timestamp.insert(1_700_000_100_u64, "first");
//! by_timestamp.insert(1_700_000_200_u64, "second");
//!
//! let since: Vec<&&str> = by_timestamp
//!     .range_from(&1_700_000_150)
//!     .map(|(_, event)| event)
//!     .collect();
//! assert_eq!(since, vec![&"second", &"third"]);
//! ```

mod lower_bound;
mod sorted_key_map;

pub use lower_bound::OrderedSequence;
pub use lower_bound::lower_bound;
pub use lower_bound::lower_bound_by;
pub use lower_bound::lower_bound_by_key;
pub use sorted_key_map::SortedKeyMap;
pub use sorted_key_map::SortedKeyMapIterator;
