//! Handlers for the `/plans` resource.

use axum::extract::State;
use axum::Json;
use vidstore_db::models::plan::Plan;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/plans
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Plan>>>> {
    let data = state.engine.list_plans().await?;
    Ok(Json(DataResponse { data }))
}
