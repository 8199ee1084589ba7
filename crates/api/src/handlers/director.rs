//! Handlers for the `/api/director` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mediateca_core::error::CoreError;
use mediateca_core::types::DbId;
use mediateca_db::models::director::{Director, DirectorInput};
use mediateca_db::repositories::DirectorRepo;

use crate::error::{ensure_valid, AppResult};
use crate::response::{DataResponse, DeleteResponse};
use crate::state::AppState;

/// POST /api/director
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<DirectorInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Director>>)> {
    ensure_valid(input.validate())?;
    let director = DirectorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: director })))
}

/// GET /api/director
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Director>>>> {
    let directores = DirectorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: directores }))
}

/// GET /api/director/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Director>>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Director",
            id,
        })?;
    Ok(Json(DataResponse { data: director }))
}

/// PUT /api/director/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DirectorInput>,
) -> AppResult<Json<DataResponse<Director>>> {
    ensure_valid(input.validate())?;
    let director = DirectorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Director",
            id,
        })?;
    Ok(Json(DataResponse { data: director }))
}

/// DELETE /api/director/{id}
///
/// Unconditional: directors carry no reference guard, so media documents
/// pointing at a removed director keep a dangling id that populates as
/// `null`.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse<Director>>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Director",
            id,
        })?;
    DirectorRepo::delete(&state.pool, id).await?;
    Ok(Json(DeleteResponse {
        message: "Director eliminado",
        data: director,
    }))
}
