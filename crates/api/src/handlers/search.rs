//! Handlers for the two catalog search variants.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use vidstore_core::types::DbId;
use vidstore_engine::MovieListing;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters shared by `/search` and `/browse`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Viewing customer, for availability classification.
    pub customer_id: DbId,
    /// Title substring filter, case-insensitive.
    pub title: String,
}

/// GET /api/v1/search -- the sort-merge variant.
pub async fn fast_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<MovieListing>>>> {
    let data = state
        .engine
        .fast_search(params.customer_id, &params.title)
        .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/browse -- the dependent-join variant.
pub async fn browse(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<MovieListing>>>> {
    let data = state
        .engine
        .browse(params.customer_id, &params.title)
        .await?;
    Ok(Json(DataResponse { data }))
}
