//! Pure domain logic for the video store.
//!
//! No I/O lives here: the rental decision rules, availability
//! classification and the merge-join grouping algorithm are plain
//! functions over values the `engine` crate reads from the stores.

pub mod availability;
pub mod merge_join;
pub mod rental;
pub mod types;
