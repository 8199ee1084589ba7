//! Shared response envelope types.
//!
//! Every success response uses one of these shapes instead of ad-hoc
//! `serde_json::json!` literals, so the API surface stays uniform across
//! resources (the envelope standardization this rewrite commits to).

use serde::Serialize;

/// Standard `{ "data": T }` envelope for entity responses.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Paginated listing envelope for media collections.
///
/// `total` counts every document matching the filter, independent of the
/// page window; `pages` is the ceiling of `total / limit`.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub total: i64,
    pub page: i64,
    pub pages: i64,
    pub limit: i64,
    pub data: Vec<T>,
}

/// Deletion confirmation carrying the removed record.
#[derive(Debug, Serialize)]
pub struct DeleteResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}
