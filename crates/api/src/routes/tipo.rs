//! Route definitions for the content type resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tipo;
use crate::state::AppState;

/// Routes mounted at `/api/tipo`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete (refused while media reference the type)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tipo::list).post(tipo::create))
        .route(
            "/{id}",
            get(tipo::get_by_id).put(tipo::update).delete(tipo::delete),
        )
}
