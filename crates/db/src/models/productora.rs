//! Production studio entity model and request payload.

use mediateca_core::types::{DbId, Timestamp};
use mediateca_core::validation::{self, FieldError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `productoras` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Productora {
    pub id: DbId,
    pub nombre: String,
    pub estado: String,
    pub descripcion: String,
    pub slogan: String,
    #[serde(rename = "fechaCreacion")]
    pub fecha_creacion: Timestamp,
    #[serde(rename = "fechaActualizacion")]
    pub fecha_actualizacion: Timestamp,
}

/// Payload for creating or replacing a studio. All four fields required.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductoraInput {
    pub nombre: Option<String>,
    pub estado: Option<String>,
    pub descripcion: Option<String>,
    pub slogan: Option<String>,
}

impl ProductoraInput {
    /// Rule set shared by create and full-field update.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        validation::required(
            &mut errors,
            "nombre",
            self.nombre.as_deref(),
            "El nombre es obligatorio",
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
        validation::required(
            &mut errors,
            "descripcion",
            self.descripcion.as_deref(),
            "La descripcion es obligatoria",
        );
        validation::required(
            &mut errors,
            "slogan",
            self.slogan.as_deref(),
            "El slogan es obligatorio",
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_required() {
        let errors = ProductoraInput {
            nombre: None,
            estado: None,
            descripcion: None,
            slogan: None,
        }
        .validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["nombre", "estado", "descripcion", "slogan"]);
    }

    #[test]
    fn complete_input_passes() {
        let input = ProductoraInput {
            nombre: Some("Warner Bros".into()),
            estado: Some("activo".into()),
            descripcion: Some("Major film studio".into()),
            slogan: Some("The stuff that dreams are made of".into()),
        };
        assert!(input.validate().is_empty());
    }
}
