//! Route definitions for the media resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/api/media`.
///
/// ```text
/// GET    /                       -> list (filters + pagination)
/// POST   /                       -> create
/// GET    /genero/{generoId}      -> list_by_genero (active media only)
/// GET    /{id}                   -> get_by_id (deep populate)
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list).post(media::create))
        .route("/genero/{genero_id}", get(media::list_by_genero))
        .route(
            "/{id}",
            get(media::get_by_id)
                .put(media::update)
                .delete(media::delete),
        )
}
