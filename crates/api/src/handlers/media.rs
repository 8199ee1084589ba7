//! Handlers for the `/api/media` resource.
//!
//! The richest controller: serial pre-checks, application-level reference
//! resolution, populated responses, and paginated/filterable listings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mediateca_core::error::CoreError;
use mediateca_core::types::DbId;
use mediateca_db::models::media::{
    CreateMedia, Media, MediaFilter, PopulatedMedia, PopulatedMediaRow, UpdateMedia,
};
use mediateca_db::repositories::{
    DirectorRepo, GeneroRepo, MediaRepo, ProductoraRepo, TipoRepo,
};
use mediateca_db::DbPool;

use crate::error::{ensure_valid, AppError, AppResult};
use crate::query::{MediaListParams, PageParams};
use crate::response::{DataResponse, DeleteResponse, PageResponse};
use crate::state::AppState;

/// Default page size for media listings.
const DEFAULT_LIMIT: i64 = 10;
/// Maximum page size for media listings.
const MAX_LIMIT: i64 = 100;

/// Ceiling division for non-negative i64 operands (`i64::div_ceil` is unstable).
fn div_ceil_i64(a: i64, b: i64) -> i64 {
    (a + b - 1) / b
}

/// POST /api/media
///
/// The serial pre-check is advisory (check-then-act); `uq_medias_serial`
/// remains the authoritative duplicate guard. The created document is
/// re-fetched with its references resolved.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMedia>,
) -> AppResult<(StatusCode, Json<DataResponse<PopulatedMedia>>)> {
    ensure_valid(input.validate())?;

    if let Some(serial) = input.serial.as_deref() {
        if MediaRepo::serial_exists(&state.pool, serial).await? {
            return Err(AppError::BadRequest(
                "El serial ya existe en la base de datos".into(),
            ));
        }
    }

    check_referencias(
        &state.pool,
        input.genero,
        input.director,
        input.productora,
        input.tipo,
    )
    .await?;

    let media = MediaRepo::create(&state.pool, &input).await?;
    let populated = MediaRepo::find_populated(&state.pool, media.id)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("Media {} missing after insert", media.id)))?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: populated.into_shallow(),
        }),
    ))
}

/// GET /api/media
///
/// Optional `genero`/`director`/`tipo` filters combined with AND, plus
/// `page`/`limit` pagination. Sorted by creation timestamp descending.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MediaListParams>,
) -> AppResult<Json<PageResponse<PopulatedMedia>>> {
    let (page, limit) = page_window(params.page, params.limit);
    let filter = MediaFilter {
        genero: params.genero,
        director: params.director,
        tipo: params.tipo,
    };

    let rows = MediaRepo::list(&state.pool, &filter, limit, (page - 1) * limit).await?;
    let total = MediaRepo::count(&state.pool, &filter).await?;

    Ok(Json(PageResponse {
        total,
        page,
        pages: div_ceil_i64(total, limit),
        limit,
        data: rows
            .into_iter()
            .map(PopulatedMediaRow::into_shallow)
            .collect(),
    }))
}

/// GET /api/media/{id}
///
/// Deep populate: includes the referenced entities' estado fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PopulatedMedia>>> {
    let row = MediaRepo::find_populated(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Media", id })?;
    Ok(Json(DataResponse {
        data: row.into_deep(),
    }))
}

/// GET /api/media/genero/{generoId}
///
/// Active media for one genre, alphabetical by title, paginated like the
/// general listing.
pub async fn list_by_genero(
    State(state): State<AppState>,
    Path(genero_id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PageResponse<PopulatedMedia>>> {
    let (page, limit) = page_window(params.page, params.limit);

    let rows =
        MediaRepo::list_by_genero(&state.pool, genero_id, limit, (page - 1) * limit).await?;
    let total = MediaRepo::count_by_genero_activo(&state.pool, genero_id).await?;

    Ok(Json(PageResponse {
        total,
        page,
        pages: div_ceil_i64(total, limit),
        limit,
        data: rows
            .into_iter()
            .map(PopulatedMediaRow::into_shallow)
            .collect(),
    }))
}

/// PUT /api/media/{id}
///
/// Partial update. A serial change is checked against every *other*
/// document before being applied; provided reference ids must resolve.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMedia>,
) -> AppResult<Json<DataResponse<PopulatedMedia>>> {
    ensure_valid(input.validate())?;

    let existing = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Media", id })?;

    if let Some(serial) = input.serial.as_deref() {
        if serial != existing.serial
            && MediaRepo::serial_taken_by_other(&state.pool, serial, id).await?
        {
            return Err(AppError::BadRequest(
                "El serial ya existe en otro media".into(),
            ));
        }
    }

    check_referencias(
        &state.pool,
        input.genero,
        input.director,
        input.productora,
        input.tipo,
    )
    .await?;

    let updated = MediaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Media", id })?;
    let populated = MediaRepo::find_populated(&state.pool, updated.id)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("Media {} missing after update", updated.id)))?;

    Ok(Json(DataResponse {
        data: populated.into_shallow(),
    }))
}

/// DELETE /api/media/{id}
///
/// Unconditional: nothing references media documents.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse<Media>>> {
    let media = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Media", id })?;
    MediaRepo::delete(&state.pool, id).await?;
    Ok(Json(DeleteResponse {
        message: "Media eliminado exitosamente",
        data: media,
    }))
}

/// Clamp raw pagination params to a sane window.
fn page_window(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    (page, limit)
}

/// Verify every provided reference id resolves to an existing row.
///
/// The schema carries no FOREIGN KEYs (directores/productoras stay
/// deletable while referenced), so a dangling id must be refused here.
async fn check_referencias(
    pool: &DbPool,
    genero: Option<DbId>,
    director: Option<DbId>,
    productora: Option<DbId>,
    tipo: Option<DbId>,
) -> Result<(), AppError> {
    if let Some(id) = genero {
        if GeneroRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::BadRequest(
                "El género referenciado no existe".into(),
            ));
        }
    }
    if let Some(id) = director {
        if DirectorRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::BadRequest(
                "El director referenciado no existe".into(),
            ));
        }
    }
    if let Some(id) = productora {
        if ProductoraRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::BadRequest(
                "La productora referenciada no existe".into(),
            ));
        }
    }
    if let Some(id) = tipo {
        if TipoRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::BadRequest(
                "El tipo referenciado no existe".into(),
            ));
        }
    }
    Ok(())
}
