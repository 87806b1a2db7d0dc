//! Rental plan rows.

use serde::Serialize;
use sqlx::FromRow;
use vidstore_core::types::DbId;

/// Full row from the `plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Plan {
    pub id: DbId,
    pub name: String,
    pub max_rentals: i64,
    /// Monthly fee in cents.
    pub monthly_fee: i64,
}
