//! Handlers for the `/mushroom-spots` resource.

use axum::extract::State;
use axum::Json;
use mycofind_core::spot::{CreateMushroomSpot, MushroomSpot, UpdateMushroomSpot};
use mycofind_core::spot_service::NearbyQuery;

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::query::NearbyParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/mushroom-spots
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateMushroomSpot>,
) -> AppResult<Json<MushroomSpot>> {
    let spot = state.spots.create(input).await?;
    tracing::info!(
        spot_id = %spot.id,
        mushroom_type = %spot.mushroom_type,
        "Mushroom spot created",
    );
    Ok(Json(spot))
}

/// GET /api/mushroom-spots
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MushroomSpot>>> {
    let spots = state.spots.list_all().await?;
    Ok(Json(spots))
}

/// GET /api/mushroom-spots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<String>,
) -> AppResult<Json<MushroomSpot>> {
    let spot = state.spots.get_by_id(&id).await?;
    Ok(Json(spot))
}

/// PUT /api/mushroom-spots/{id}
///
/// Partial update: only fields present in the body are written.
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<String>,
    ValidJson(patch): ValidJson<UpdateMushroomSpot>,
) -> AppResult<Json<MushroomSpot>> {
    let spot = state.spots.update(&id, patch).await?;
    tracing::info!(spot_id = %spot.id, "Mushroom spot updated");
    Ok(Json(spot))
}

/// DELETE /api/mushroom-spots/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<String>,
) -> AppResult<Json<MessageResponse>> {
    state.spots.delete(&id).await?;
    tracing::info!(spot_id = %id, "Mushroom spot deleted");
    Ok(Json(MessageResponse::new("Mushroom spot deleted successfully")))
}

/// GET /api/mushroom-spots/nearby/{latitude}/{longitude}?radius_km=
pub async fn nearby(
    State(state): State<AppState>,
    ValidPath((latitude, longitude)): ValidPath<(f64, f64)>,
    ValidQuery(params): ValidQuery<NearbyParams>,
) -> AppResult<Json<Vec<MushroomSpot>>> {
    let query = NearbyQuery::new(latitude, longitude, params.radius_km);
    let spots = state.spots.nearby(query).await?;
    tracing::debug!(
        latitude,
        longitude,
        radius_km = query.radius_km,
        count = spots.len(),
        "Nearby spots",
    );
    Ok(Json(spots))
}
