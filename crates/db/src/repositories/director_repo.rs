//! Repository for the `directores` table.

use mediateca_core::types::DbId;
use sqlx::PgPool;

use crate::models::director::{Director, DirectorInput};

/// Column list shared across queries.
const COLUMNS: &str = "id, nombre, estado, fecha_creacion, fecha_actualizacion";

/// CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    ///
    /// `estado` defaults to `'activo'` when omitted. Duplicate names are
    /// rejected by `uq_directores_nombre`.
    pub async fn create(pool: &PgPool, input: &DirectorInput) -> Result<Director, sqlx::Error> {
        let query = format!(
            "INSERT INTO directores (nombre, estado)
             VALUES ($1, COALESCE($2, 'activo'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.nombre)
            .bind(&input.estado)
            .fetch_one(pool)
            .await
    }

    /// Find a director by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directores WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every director, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directores ORDER BY fecha_creacion DESC");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Full-field update; refreshes `fecha_actualizacion`.
    ///
    /// Returns `None` when no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &DirectorInput,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!(
            "UPDATE directores
             SET nombre = $2, estado = $3, fecha_actualizacion = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.estado)
            .fetch_optional(pool)
            .await
    }

    /// Delete a director by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM directores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
