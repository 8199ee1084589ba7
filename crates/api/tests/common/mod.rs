//! Shared harness for HTTP-level integration tests.
//!
//! Requests go straight to the router via `tower::ServiceExt::oneshot`, no
//! TCP listener involved, and the router is built by the same
//! [`build_app_router`] the production binary uses, so every test runs
//! through the full middleware stack.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use mediateca_api::config::ServerConfig;
use mediateca_api::router::build_app_router;
use mediateca_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers over the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids of one seeded row per referenced entity, created through the API.
pub struct Catalogo {
    pub genero_id: i64,
    pub director_id: i64,
    pub productora_id: i64,
    pub tipo_id: i64,
}

/// POST one genre, director, studio, and type; return their ids.
pub async fn seed_catalogo(pool: &PgPool) -> Catalogo {
    let genero = body_json(
        post_json(
            build_test_app(pool.clone()),
            "/api/genero",
            serde_json::json!({
                "nombre": "Drama",
                "descripcion": "Drama films and series",
                "estado": "activo"
            }),
        )
        .await,
    )
    .await;

    let director = body_json(
        post_json(
            build_test_app(pool.clone()),
            "/api/director",
            serde_json::json!({"nombre": "Christopher Nolan", "estado": "activo"}),
        )
        .await,
    )
    .await;

    let productora = body_json(
        post_json(
            build_test_app(pool.clone()),
            "/api/productora",
            serde_json::json!({
                "nombre": "Warner Bros",
                "estado": "activo",
                "descripcion": "Major film studio",
                "slogan": "The stuff that dreams are made of"
            }),
        )
        .await,
    )
    .await;

    let tipo = body_json(
        post_json(
            build_test_app(pool.clone()),
            "/api/tipo",
            serde_json::json!({
                "nombre": "Pelicula",
                "descripcion": "Feature-length films"
            }),
        )
        .await,
    )
    .await;

    Catalogo {
        genero_id: genero["data"]["id"].as_i64().unwrap(),
        director_id: director["data"]["id"].as_i64().unwrap(),
        productora_id: productora["data"]["id"].as_i64().unwrap(),
        tipo_id: tipo["data"]["id"].as_i64().unwrap(),
    }
}

/// JSON body for a media create referencing the seeded catalog.
pub fn media_body(serial: &str, titulo: &str, refs: &Catalogo) -> serde_json::Value {
    serde_json::json!({
        "serial": serial,
        "titulo": titulo,
        "sinopsis": "A synopsis long enough to satisfy the bounds",
        "url": format!("https://example.com/{serial}"),
        "año": 2010,
        "genero": refs.genero_id,
        "director": refs.director_id,
        "productora": refs.productora_id,
        "tipo": refs.tipo_id
    })
}
