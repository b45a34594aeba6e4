pub mod health;
pub mod species;
pub mod spots;
pub mod status;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /mushroom-spots                               list, create
/// /mushroom-spots/nearby/{latitude}/{longitude} spots within ?radius_km
/// /mushroom-spots/{id}                          get, update, delete
///
/// /mushrooms                                    list (?search), create
/// /mushrooms/{id}                               get, replace, delete
///
/// /status                                       list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/mushroom-spots", spots::router())
        .nest("/mushrooms", species::router())
        .nest("/status", status::router())
}
