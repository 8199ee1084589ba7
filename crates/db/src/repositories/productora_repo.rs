//! Repository for the `productoras` table.

use mediateca_core::types::DbId;
use sqlx::PgPool;

use crate::models::productora::{Productora, ProductoraInput};

const COLUMNS: &str = "id, nombre, estado, descripcion, slogan, fecha_creacion, fecha_actualizacion";

/// CRUD operations for production studios.
pub struct ProductoraRepo;

impl ProductoraRepo {
    /// Insert a new studio, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProductoraInput) -> Result<Productora, sqlx::Error> {
        let query = format!(
            "INSERT INTO productoras (nombre, estado, descripcion, slogan)
             VALUES ($1, COALESCE($2, 'activo'), $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Productora>(&query)
            .bind(&input.nombre)
            .bind(&input.estado)
            .bind(&input.descripcion)
            .bind(&input.slogan)
            .fetch_one(pool)
            .await
    }

    /// Find a studio by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Productora>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productoras WHERE id = $1");
        sqlx::query_as::<_, Productora>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every studio, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Productora>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productoras ORDER BY fecha_creacion DESC");
        sqlx::query_as::<_, Productora>(&query)
            .fetch_all(pool)
            .await
    }

    /// Full-field update; refreshes `fecha_actualizacion`.
    ///
    /// Returns `None` when no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductoraInput,
    ) -> Result<Option<Productora>, sqlx::Error> {
        let query = format!(
            "UPDATE productoras
             SET nombre = $2, estado = $3, descripcion = $4, slogan = $5,
                 fecha_actualizacion = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Productora>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.estado)
            .bind(&input.descripcion)
            .bind(&input.slogan)
            .fetch_optional(pool)
            .await
    }

    /// Delete a studio by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM productoras WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
