//! Repository for the `medias` table, including the populate joins.
//!
//! Read paths come in two shapes: the raw row ([`Media`], reference columns
//! as ids) and the populated row ([`PopulatedMediaRow`], LEFT JOINed against
//! the four referenced tables so dangling ids resolve to `null` rather than
//! dropping the document).

use mediateca_core::types::DbId;
use sqlx::postgres::PgArguments;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::{PgPool, Postgres};

use crate::models::media::{CreateMedia, Media, MediaFilter, PopulatedMediaRow, UpdateMedia};

/// Raw column list shared across queries.
const COLUMNS: &str = "id, serial, titulo, sinopsis, url, url_imagen, anio, estado, \
    genero_id, director_id, productora_id, tipo_id, fecha_creacion, fecha_actualizacion";

/// Populated projection: media columns plus the display fields of each
/// referenced entity, aliased for [`PopulatedMediaRow`].
const JOINED_COLUMNS: &str = "m.id, m.serial, m.titulo, m.sinopsis, m.url, m.url_imagen, \
    m.anio, m.estado, m.genero_id, m.director_id, m.productora_id, m.tipo_id, \
    m.fecha_creacion, m.fecha_actualizacion, \
    g.nombre AS genero_nombre, g.descripcion AS genero_descripcion, g.estado AS genero_estado, \
    d.nombre AS director_nombre, d.estado AS director_estado, \
    p.nombre AS productora_nombre, p.slogan AS productora_slogan, \
    p.descripcion AS productora_descripcion, p.estado AS productora_estado, \
    t.nombre AS tipo_nombre, t.descripcion AS tipo_descripcion";

const JOINS: &str = "FROM medias m \
    LEFT JOIN generos g ON g.id = m.genero_id \
    LEFT JOIN directores d ON d.id = m.director_id \
    LEFT JOIN productoras p ON p.id = m.productora_id \
    LEFT JOIN tipos t ON t.id = m.tipo_id";

/// CRUD, search, and reference-count operations for media documents.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a new media document, returning the raw created row.
    ///
    /// Duplicate serials are rejected by `uq_medias_serial`; `estado`
    /// starts as the column default `'activo'`.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO medias
                (serial, titulo, sinopsis, url, url_imagen, anio,
                 genero_id, director_id, productora_id, tipo_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&input.serial)
            .bind(&input.titulo)
            .bind(&input.sinopsis)
            .bind(&input.url)
            .bind(&input.url_imagen)
            .bind(input.anio)
            .bind(input.genero)
            .bind(input.director)
            .bind(input.productora)
            .bind(input.tipo)
            .fetch_one(pool)
            .await
    }

    /// Find a media document by id, references as raw ids.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM medias WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a media document by id with its references resolved.
    pub async fn find_populated(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PopulatedMediaRow>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} {JOINS} WHERE m.id = $1");
        sqlx::query_as::<_, PopulatedMediaRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of the general listing, newest first, references resolved.
    pub async fn list(
        pool: &PgPool,
        filter: &MediaFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PopulatedMediaRow>, sqlx::Error> {
        let (where_clause, bind_idx) = filter_clause(filter);
        let query = format!(
            "SELECT {JOINED_COLUMNS} {JOINS} {where_clause} \
             ORDER BY m.fecha_creacion DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );
        let q = bind_filter(sqlx::query_as::<_, PopulatedMediaRow>(&query), filter);
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count documents matching the filter, independent of the page window.
    pub async fn count(pool: &PgPool, filter: &MediaFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = filter_clause(filter);
        let query = format!("SELECT COUNT(*)::BIGINT FROM medias m {where_clause}");
        let q = bind_filter_scalar(sqlx::query_scalar::<_, i64>(&query), filter);
        q.fetch_one(pool).await
    }

    /// One page of active media for a genre, alphabetical by title.
    pub async fn list_by_genero(
        pool: &PgPool,
        genero_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PopulatedMediaRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} {JOINS} \
             WHERE m.genero_id = $1 AND m.estado = 'activo' \
             ORDER BY m.titulo ASC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PopulatedMediaRow>(&query)
            .bind(genero_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count active media for a genre.
    pub async fn count_by_genero_activo(
        pool: &PgPool,
        genero_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM medias WHERE genero_id = $1 AND estado = 'activo'",
        )
        .bind(genero_id)
        .fetch_one(pool)
        .await
    }

    /// Whether any media document already holds this serial.
    pub async fn serial_exists(pool: &PgPool, serial: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM medias WHERE serial = $1)")
            .bind(serial)
            .fetch_one(pool)
            .await
    }

    /// Whether a media document other than `id` holds this serial.
    pub async fn serial_taken_by_other(
        pool: &PgPool,
        serial: &str,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM medias WHERE serial = $1 AND id <> $2)",
        )
        .bind(serial)
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Number of media documents referencing the given genre (delete guard).
    pub async fn count_by_genero(pool: &PgPool, genero_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM medias WHERE genero_id = $1")
            .bind(genero_id)
            .fetch_one(pool)
            .await
    }

    /// Number of media documents referencing the given type (delete guard).
    pub async fn count_by_tipo(pool: &PgPool, tipo_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM medias WHERE tipo_id = $1")
            .bind(tipo_id)
            .fetch_one(pool)
            .await
    }

    /// Partial update: only non-`None` fields are applied; always refreshes
    /// `fecha_actualizacion`.
    ///
    /// Returns `None` when no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedia,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "UPDATE medias SET
                serial = COALESCE($2, serial),
                titulo = COALESCE($3, titulo),
                sinopsis = COALESCE($4, sinopsis),
                url = COALESCE($5, url),
                url_imagen = COALESCE($6, url_imagen),
                anio = COALESCE($7, anio),
                estado = COALESCE($8, estado),
                genero_id = COALESCE($9, genero_id),
                director_id = COALESCE($10, director_id),
                productora_id = COALESCE($11, productora_id),
                tipo_id = COALESCE($12, tipo_id),
                fecha_actualizacion = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(&input.serial)
            .bind(&input.titulo)
            .bind(&input.sinopsis)
            .bind(&input.url)
            .bind(&input.url_imagen)
            .bind(input.anio)
            .bind(&input.estado)
            .bind(input.genero)
            .bind(input.director)
            .bind(input.productora)
            .bind(input.tipo)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media document by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM medias WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Assemble the optional-filter WHERE clause; returns the clause and the
/// next free bind index (for LIMIT/OFFSET).
fn filter_clause(filter: &MediaFilter) -> (String, usize) {
    let mut conditions = Vec::new();
    let mut idx = 0;
    if filter.genero.is_some() {
        idx += 1;
        conditions.push(format!("m.genero_id = ${idx}"));
    }
    if filter.director.is_some() {
        idx += 1;
        conditions.push(format!("m.director_id = ${idx}"));
    }
    if filter.tipo.is_some() {
        idx += 1;
        conditions.push(format!("m.tipo_id = ${idx}"));
    }
    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (clause, idx + 1)
}

/// Bind the present filter values in the same order `filter_clause` numbered
/// them.
fn bind_filter<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    filter: &MediaFilter,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for value in [filter.genero, filter.director, filter.tipo]
        .into_iter()
        .flatten()
    {
        q = q.bind(value);
    }
    q
}

fn bind_filter_scalar<'q, O>(
    mut q: QueryScalar<'q, Postgres, O, PgArguments>,
    filter: &MediaFilter,
) -> QueryScalar<'q, Postgres, O, PgArguments> {
    for value in [filter.genero, filter.director, filter.tipo]
        .into_iter()
        .flatten()
    {
        q = q.bind(value);
    }
    q
}
