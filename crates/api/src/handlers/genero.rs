//! Handlers for the `/api/genero` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mediateca_core::error::CoreError;
use mediateca_core::types::DbId;
use mediateca_db::models::genero::{Genero, GeneroInput};
use mediateca_db::repositories::{GeneroRepo, MediaRepo};

use crate::error::{ensure_valid, AppError, AppResult};
use crate::response::{DataResponse, DeleteResponse};
use crate::state::AppState;

/// POST /api/genero
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<GeneroInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Genero>>)> {
    ensure_valid(input.validate())?;
    let genero = GeneroRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: genero })))
}

/// GET /api/genero
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Genero>>>> {
    let generos = GeneroRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: generos }))
}

/// GET /api/genero/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Genero>>> {
    let genero = GeneroRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Genero",
            id,
        })?;
    Ok(Json(DataResponse { data: genero }))
}

/// PUT /api/genero/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GeneroInput>,
) -> AppResult<Json<DataResponse<Genero>>> {
    ensure_valid(input.validate())?;
    let genero = GeneroRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Genero",
            id,
        })?;
    Ok(Json(DataResponse { data: genero }))
}

/// DELETE /api/genero/{id}
///
/// Guarded: refused while any media document still references the genre.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse<Genero>>> {
    let genero = GeneroRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Genero",
            id,
        })?;

    let referencias = MediaRepo::count_by_genero(&state.pool, id).await?;
    if referencias > 0 {
        return Err(AppError::BadRequest(
            "No se puede eliminar el genero porque está siendo usado en uno o más medios".into(),
        ));
    }

    GeneroRepo::delete(&state.pool, id).await?;
    Ok(Json(DeleteResponse {
        message: "Genero eliminado",
        data: genero,
    }))
}
