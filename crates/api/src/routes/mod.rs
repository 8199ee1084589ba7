pub mod director;
pub mod genero;
pub mod health;
pub mod media;
pub mod productora;
pub mod tipo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /director              POST create, GET list
/// /director/{id}         GET, PUT, DELETE
/// /genero                POST create, GET list
/// /genero/{id}           GET, PUT, DELETE (guarded by media references)
/// /productora            POST create, GET list
/// /productora/{id}       GET, PUT, DELETE
/// /tipo                  POST create, GET list
/// /tipo/{id}             GET, PUT, DELETE (guarded by media references)
/// /media                 POST create, GET list + filters + pagination
/// /media/{id}            GET (deep populate), PUT, DELETE
/// /media/genero/{generoId}   GET active media for a genre
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/director", director::router())
        .nest("/genero", genero::router())
        .nest("/productora", productora::router())
        .nest("/tipo", tipo::router())
        .nest("/media", media::router())
}
