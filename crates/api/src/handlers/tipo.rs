//! Handlers for the `/api/tipo` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mediateca_core::error::CoreError;
use mediateca_core::types::DbId;
use mediateca_db::models::tipo::{Tipo, TipoInput};
use mediateca_db::repositories::{MediaRepo, TipoRepo};

use crate::error::{ensure_valid, AppError, AppResult};
use crate::response::{DataResponse, DeleteResponse};
use crate::state::AppState;

/// POST /api/tipo
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TipoInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Tipo>>)> {
    ensure_valid(input.validate())?;
    let tipo = TipoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tipo })))
}

/// GET /api/tipo
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Tipo>>>> {
    let tipos = TipoRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tipos }))
}

/// GET /api/tipo/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Tipo>>> {
    let tipo = TipoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Tipo", id })?;
    Ok(Json(DataResponse { data: tipo }))
}

/// PUT /api/tipo/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TipoInput>,
) -> AppResult<Json<DataResponse<Tipo>>> {
    ensure_valid(input.validate())?;
    let tipo = TipoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Tipo", id })?;
    Ok(Json(DataResponse { data: tipo }))
}

/// DELETE /api/tipo/{id}
///
/// Guarded: refused while any media document still references the type.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse<Tipo>>> {
    let tipo = TipoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Tipo", id })?;

    let referencias = MediaRepo::count_by_tipo(&state.pool, id).await?;
    if referencias > 0 {
        return Err(AppError::BadRequest(
            "No se puede eliminar el tipo porque está siendo usado en uno o más medios".into(),
        ));
    }

    TipoRepo::delete(&state.pool, id).await?;
    Ok(Json(DeleteResponse {
        message: "Tipo eliminado correctamente",
        data: tipo,
    }))
}
