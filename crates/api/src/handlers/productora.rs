//! Handlers for the `/api/productora` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mediateca_core::error::CoreError;
use mediateca_core::types::DbId;
use mediateca_db::models::productora::{Productora, ProductoraInput};
use mediateca_db::repositories::ProductoraRepo;

use crate::error::{ensure_valid, AppResult};
use crate::response::{DataResponse, DeleteResponse};
use crate::state::AppState;

/// POST /api/productora
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductoraInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Productora>>)> {
    ensure_valid(input.validate())?;
    let productora = ProductoraRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: productora })))
}

/// GET /api/productora
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Productora>>>> {
    let productoras = ProductoraRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: productoras }))
}

/// GET /api/productora/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Productora>>> {
    let productora = ProductoraRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Productora",
            id,
        })?;
    Ok(Json(DataResponse { data: productora }))
}

/// PUT /api/productora/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProductoraInput>,
) -> AppResult<Json<DataResponse<Productora>>> {
    ensure_valid(input.validate())?;
    let productora = ProductoraRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Productora",
            id,
        })?;
    Ok(Json(DataResponse { data: productora }))
}

/// DELETE /api/productora/{id}
///
/// Unconditional: studios carry no reference guard (deliberate asymmetry
/// with genero/tipo, kept as-is).
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse<Productora>>> {
    let productora = ProductoraRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Productora",
            id,
        })?;
    ProductoraRepo::delete(&state.pool, id).await?;
    Ok(Json(DeleteResponse {
        message: "Productora eliminada",
        data: productora,
    }))
}
