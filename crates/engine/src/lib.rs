//! Rental transaction engine.
//!
//! Drives the multi-step operations (rent, return, change-plan and the
//! single-read lookups around them) against the customer store, and the
//! two search variants against the catalog store. Every mutating
//! operation runs inside one sqlx transaction: the transaction object
//! returned by `begin()` is the coordinator scope, consumed by either
//! `commit()` or `rollback()`, and dropped-on-error means rolled back.

use tokio::sync::Mutex;
use vidstore_core::types::DbId;
use vidstore_db::DbPool;

mod search;
mod transactions;

pub use search::MovieListing;
pub use transactions::{PersonalData, PlanChangeReceipt, RentReceipt, ReturnReceipt};

/// Engine-level error taxonomy.
///
/// Store failures are fatal and abort the operation; business-rule
/// failures never show up here -- they are the `RolledBack` branch of an
/// operation's receipt.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Connectivity or statement failure in one of the stores.
    #[error(transparent)]
    Store(#[from] sqlx::Error),

    /// A row the operation depends on does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },
}

/// The transactional core of the rental service.
///
/// Holds one pool per store. Mutating operations serialize on an internal
/// lock: only one rent/return/change-plan transaction is in flight on the
/// customer store at a time, so the write-then-verify reads cannot watch
/// each other mid-flight.
pub struct RentalEngine {
    catalog: DbPool,
    customers: DbPool,
    write_lock: Mutex<()>,
}

impl RentalEngine {
    pub fn new(catalog: DbPool, customers: DbPool) -> Self {
        Self {
            catalog,
            customers,
            write_lock: Mutex::new(()),
        }
    }
}
