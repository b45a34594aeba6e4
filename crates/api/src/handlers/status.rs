//! Handlers for `/status` connectivity checks.

use axum::extract::State;
use axum::Json;
use mycofind_core::error::CoreError;
use mycofind_core::search::STATUS_LIST_CAP;
use mycofind_core::status::{CreateStatusCheck, StatusCheck};

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::state::AppState;

/// POST /api/status
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateStatusCheck>,
) -> AppResult<Json<StatusCheck>> {
    let check = StatusCheck::new(input);
    state
        .status_checks
        .insert(&check)
        .await
        .map_err(CoreError::from)?;
    tracing::debug!(client_name = %check.client_name, "Status check recorded");
    Ok(Json(check))
}

/// GET /api/status
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StatusCheck>>> {
    let checks = state
        .status_checks
        .list(STATUS_LIST_CAP)
        .await
        .map_err(CoreError::from)?;
    Ok(Json(checks))
}
