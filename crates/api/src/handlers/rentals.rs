//! Handlers for renting and returning movies.
//!
//! Both operations report their outcome in the body: a rolled-back
//! transaction is a successful HTTP exchange whose receipt says
//! `rolled_back`, with the checked values for diagnostics.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use vidstore_core::types::DbId;
use vidstore_db::models::rental::Rental;
use vidstore_engine::{RentReceipt, ReturnReceipt};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for rent and return.
#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    pub movie_id: DbId,
}

/// POST /api/v1/customers/{id}/rentals
pub async fn rent(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MovieRequest>,
) -> AppResult<Json<DataResponse<RentReceipt>>> {
    let data = state.engine.rent(id, input.movie_id).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/customers/{id}/rentals
///
/// Full rental history, newest first. Closed rows are kept forever.
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Rental>>>> {
    let data = state.engine.rental_history(id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/customers/{id}/returns
pub async fn return_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MovieRequest>,
) -> AppResult<Json<DataResponse<ReturnReceipt>>> {
    let data = state.engine.return_movie(id, input.movie_id).await?;
    Ok(Json(DataResponse { data }))
}
