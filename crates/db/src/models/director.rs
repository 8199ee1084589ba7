//! Director entity model and request payload.

use mediateca_core::types::{DbId, Timestamp};
use mediateca_core::validation::{self, FieldError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `directores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub nombre: String,
    pub estado: String,
    #[serde(rename = "fechaCreacion")]
    pub fecha_creacion: Timestamp,
    #[serde(rename = "fechaActualizacion")]
    pub fecha_actualizacion: Timestamp,
}

/// Payload for creating or replacing a director.
///
/// Fields are declared optional so an absent value surfaces as a field
/// error from [`DirectorInput::validate`] instead of a body rejection;
/// validated input always carries both values.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectorInput {
    pub nombre: Option<String>,
    pub estado: Option<String>,
}

impl DirectorInput {
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
            "estado",
            self.estado.as_deref(),
            "El estado es obligatorio",
        );
        validation::valid_estado(
            &mut errors,
            "estado",
            self.estado.as_deref(),
            "El estado debe ser activo o inactivo",
        );
        errors
    }
}
