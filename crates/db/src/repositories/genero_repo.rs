//! Repository for the `generos` table.

use mediateca_core::types::DbId;
use sqlx::PgPool;

use crate::models::genero::{Genero, GeneroInput};

const COLUMNS: &str = "id, nombre, descripcion, estado, fecha_creacion, fecha_actualizacion";

/// CRUD operations for genres.
pub struct GeneroRepo;

impl GeneroRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &PgPool, input: &GeneroInput) -> Result<Genero, sqlx::Error> {
        let query = format!(
            "INSERT INTO generos (nombre, descripcion, estado)
             VALUES ($1, $2, COALESCE($3, 'activo'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genero>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.estado)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM generos WHERE id = $1");
        sqlx::query_as::<_, Genero>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every genre, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM generos ORDER BY fecha_creacion DESC");
        sqlx::query_as::<_, Genero>(&query).fetch_all(pool).await
    }

    /// Full-field update; refreshes `fecha_actualizacion`.
    ///
    /// Returns `None` when no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GeneroInput,
    ) -> Result<Option<Genero>, sqlx::Error> {
        let query = format!(
            "UPDATE generos
             SET nombre = $2, descripcion = $3, estado = $4, fecha_actualizacion = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genero>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.estado)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre by id. Returns `true` if a row was removed.
    ///
    /// The reference guard against live media belongs to the caller; see
    /// `MediaRepo::count_by_genero`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM generos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
