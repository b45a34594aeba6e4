//! Handlers for the `/mushrooms` species reference resource.

use axum::extract::State;
use axum::Json;
use mycofind_core::species::{CreateMushroomInfo, MushroomInfo};

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::query::SearchParams;
use crate::response::DeletedResponse;
use crate::state::AppState;

/// POST /api/mushrooms
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateMushroomInfo>,
) -> AppResult<Json<MushroomInfo>> {
    let info = state.species.create(input).await?;
    tracing::info!(mushroom_id = %info.id, common_name = %info.common_name, "Mushroom created");
    Ok(Json(info))
}

/// GET /api/mushrooms?search=
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<SearchParams>,
) -> AppResult<Json<Vec<MushroomInfo>>> {
    let records = state.species.list(params.search.as_deref()).await?;
    Ok(Json(records))
}

/// GET /api/mushrooms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<String>,
) -> AppResult<Json<MushroomInfo>> {
    let info = state.species.get_by_id(&id).await?;
    Ok(Json(info))
}

/// PUT /api/mushrooms/{id}
///
/// Full replace; omitted defaulted fields revert to their defaults.
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<String>,
    ValidJson(input): ValidJson<CreateMushroomInfo>,
) -> AppResult<Json<MushroomInfo>> {
    let info = state.species.update(&id, input).await?;
    tracing::info!(mushroom_id = %info.id, "Mushroom replaced");
    Ok(Json(info))
}

/// DELETE /api/mushrooms/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<String>,
) -> AppResult<Json<DeletedResponse>> {
    let id = state.species.delete(&id).await?;
    tracing::info!(mushroom_id = %id, "Mushroom deleted");
    Ok(Json(DeletedResponse {
        message: "Mushroom deleted successfully".to_string(),
        id,
    }))
}
