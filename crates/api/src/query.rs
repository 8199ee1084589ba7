//! Shared query parameter types for the media listing handlers.

use mediateca_core::types::DbId;
use serde::Deserialize;

/// Query string for `GET /api/media`: optional reference filters combined
/// with AND, plus pagination (`?genero=&director=&tipo=&page=&limit=`).
#[derive(Debug, Deserialize)]
pub struct MediaListParams {
    pub genero: Option<DbId>,
    pub director: Option<DbId>,
    pub tipo: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Pagination-only query string (`?page=&limit=`). Values are clamped in
/// the handler.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
