//! Customer-store projections.
//!
//! Nothing returns the full customer row: it carries the stored
//! password, and no caller needs it. The repositories hand out these
//! narrow projections instead.

use serde::Serialize;
use sqlx::FromRow;
use vidstore_core::types::DbId;

/// Name projection for personal-data lookups.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerName {
    pub first_name: String,
    pub last_name: String,
}

/// A customer's current plan id joined with that plan's rental cap.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct PlanInfo {
    pub plan_id: DbId,
    pub max_rentals: i64,
}
