//! Route definitions for the genre resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::genero;
use crate::state::AppState;

/// Routes mounted at `/api/genero`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete (refused while media reference the genre)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(genero::list).post(genero::create))
        .route(
            "/{id}",
            get(genero::get_by_id)
                .put(genero::update)
                .delete(genero::delete),
        )
}
