//! Row structs for both stores.
//!
//! Each submodule contains `FromRow` structs matching the store rows plus
//! the small projection types the repositories return.

pub mod customer;
pub mod movie;
pub mod plan;
pub mod rental;
pub mod search;
