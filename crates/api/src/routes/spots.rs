//! Route definitions for the `/mushroom-spots` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::spots;
use crate::state::AppState;

/// Routes mounted at `/mushroom-spots`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /nearby/{latitude}/{longitude}   -> nearby
/// GET    /{id}                            -> get_by_id
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(spots::list).post(spots::create))
        .route("/nearby/{latitude}/{longitude}", get(spots::nearby))
        .route(
            "/{id}",
            get(spots::get_by_id)
                .put(spots::update)
                .delete(spots::delete),
        )
}
