//! Row types for the fast-search result streams.

use sqlx::FromRow;
use vidstore_core::merge_join::NameRow;
use vidstore_core::types::DbId;

/// One row of the movie-to-director or movie-to-actor stream.
///
/// The name fields are null when the movie matched the title filter but
/// has nobody attached (the LEFT join pads the stream so no matching
/// movie is dropped).
#[derive(Debug, Clone, FromRow)]
pub struct CreditRow {
    pub movie_id: DbId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<CreditRow> for NameRow {
    fn from(row: CreditRow) -> Self {
        NameRow {
            movie_id: row.movie_id,
            first_name: row.first_name,
            last_name: row.last_name,
        }
    }
}
