//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use vidstore_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub customer_id: DbId,
}

/// POST /api/v1/auth/login
///
/// Authenticate with login + password by exact match. An expected miss is
/// a 401, not a server error.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let customer_id = state
        .engine
        .login(&input.login, &input.password)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid login or password".into()))?;

    Ok(Json(DataResponse {
        data: LoginResponse { customer_id },
    }))
}
