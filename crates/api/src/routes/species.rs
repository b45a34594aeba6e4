//! Route definitions for the `/mushrooms` species reference resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::species;
use crate::state::AppState;

/// Routes mounted at `/mushrooms`.
///
/// ```text
/// GET    /        -> list (?search=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (full replace)
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(species::list).post(species::create))
        .route(
            "/{id}",
            get(species::get_by_id)
                .put(species::update)
                .delete(species::delete),
        )
}
