//! Handlers for the `/customers` resource: personal data and plan changes.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use vidstore_core::types::DbId;
use vidstore_engine::{PersonalData, PlanChangeReceipt};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /customers/{id}/plan`.
#[derive(Debug, Deserialize)]
pub struct ChangePlanRequest {
    pub plan_id: DbId,
}

/// GET /api/v1/customers/{id}
///
/// Name and remaining rentals for the greeting screen.
pub async fn personal_data(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PersonalData>>> {
    let data = state.engine.personal_data(id).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/customers/{id}/plan
///
/// Move the customer onto another plan. The receipt carries the outcome:
/// a rejected downgrade or a same-plan no-op is a 200 with the rollback
/// reported, not an error status.
pub async fn change_plan(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ChangePlanRequest>,
) -> AppResult<Json<DataResponse<PlanChangeReceipt>>> {
    let data = state.engine.change_plan(id, input.plan_id).await?;
    Ok(Json(DataResponse { data }))
}
