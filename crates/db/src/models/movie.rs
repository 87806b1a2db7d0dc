//! Catalog-store movie rows and name projections.

use serde::Serialize;
use sqlx::FromRow;
use vidstore_core::types::DbId;

/// Full row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: Option<i64>,
}

/// Name projection from `directors` / `actors`.
///
/// Catalog data is dirty enough that either part can be missing.
#[derive(Debug, Clone, FromRow)]
pub struct PersonName {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
