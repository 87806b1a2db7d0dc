//! HTTP handlers, one module per resource.

pub mod auth;
pub mod customers;
pub mod plans;
pub mod rentals;
pub mod search;
