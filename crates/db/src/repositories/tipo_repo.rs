//! Repository for the `tipos` table.

use mediateca_core::types::DbId;
use sqlx::PgPool;

use crate::models::tipo::{Tipo, TipoInput};

const COLUMNS: &str = "id, nombre, descripcion, fecha_creacion, fecha_actualizacion";

/// CRUD operations for content types.
pub struct TipoRepo;

impl TipoRepo {
    /// Insert a new content type, returning the created row.
    ///
    /// Duplicate names are rejected by `uq_tipos_nombre`.
    pub async fn create(pool: &PgPool, input: &TipoInput) -> Result<Tipo, sqlx::Error> {
        let query = format!(
            "INSERT INTO tipos (nombre, descripcion)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tipo>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .fetch_one(pool)
            .await
    }

    /// Find a content type by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tipo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tipos WHERE id = $1");
        sqlx::query_as::<_, Tipo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every content type, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tipo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tipos ORDER BY fecha_creacion DESC");
        sqlx::query_as::<_, Tipo>(&query).fetch_all(pool).await
    }

    /// Full-field update; refreshes `fecha_actualizacion`.
    ///
    /// Returns `None` when no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TipoInput,
    ) -> Result<Option<Tipo>, sqlx::Error> {
        let query = format!(
            "UPDATE tipos
             SET nombre = $2, descripcion = $3, fecha_actualizacion = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tipo>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .fetch_optional(pool)
            .await
    }

    /// Delete a content type by id. Returns `true` if a row was removed.
    ///
    /// The reference guard against live media belongs to the caller; see
    /// `MediaRepo::count_by_tipo`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tipos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
