//! Content type entity model and request payload.

use mediateca_core::types::{DbId, Timestamp};
use mediateca_core::validation::{self, FieldError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tipos` table. Content types carry no `estado`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tipo {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: String,
    #[serde(rename = "fechaCreacion")]
    pub fecha_creacion: Timestamp,
    #[serde(rename = "fechaActualizacion")]
    pub fecha_actualizacion: Timestamp,
}

/// Payload for creating or replacing a content type.
#[derive(Debug, Clone, Deserialize)]
pub struct TipoInput {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}

impl TipoInput {
    /// Rule set shared by create and full-field update.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        validation::required(
            &mut errors,
            "nombre",
            self.nombre.as_deref(),
            "El nombre es obligatorio",
        );
        validation::length_range(
            &mut errors,
            "nombre",
            self.nombre.as_deref(),
            2,
            50,
            "El nombre debe tener entre 2 y 50 caracteres",
        );
        validation::required(
            &mut errors,
            "descripcion",
            self.descripcion.as_deref(),
            "La descripcion es obligatoria",
        );
        validation::length_range(
            &mut errors,
            "descripcion",
            self.descripcion.as_deref(),
            10,
            200,
            "La descripcion debe tener entre 10 y 200 caracteres",
        );
        errors
    }
}
