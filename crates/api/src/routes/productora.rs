//! Route definitions for the production studio resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::productora;
use crate::state::AppState;

/// Routes mounted at `/api/productora`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(productora::list).post(productora::create))
        .route(
            "/{id}",
            get(productora::get_by_id)
                .put(productora::update)
                .delete(productora::delete),
        )
}
