//! Rental event rows.

use serde::Serialize;
use sqlx::FromRow;
use vidstore_core::types::{DbId, Timestamp};

/// Full row from the `rentals` table.
///
/// `status` holds [`vidstore_core::rental::RENTAL_STATUS_OPEN`] while the
/// movie is out and [`vidstore_core::rental::RENTAL_STATUS_CLOSED`] once
/// returned. Rows are never deleted; history is the point.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub customer_id: DbId,
    pub movie_id: DbId,
    pub status: i64,
    pub rented_at: Timestamp,
}
