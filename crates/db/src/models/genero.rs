//! Genre entity model and request payload.

use mediateca_core::types::{DbId, Timestamp};
use mediateca_core::validation::{self, FieldError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `generos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genero {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: String,
    pub estado: String,
    #[serde(rename = "fechaCreacion")]
    pub fecha_creacion: Timestamp,
    #[serde(rename = "fechaActualizacion")]
    pub fecha_actualizacion: Timestamp,
}

/// Payload for creating or replacing a genre.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneroInput {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub estado: Option<String>,
}

impl GeneroInput {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn drama() -> GeneroInput {
        GeneroInput {
            nombre: Some("Drama".into()),
            descripcion: Some("Drama films and series".into()),
            estado: Some("activo".into()),
        }
    }

    #[test]
    fn complete_input_passes() {
        assert!(drama().validate().is_empty());
    }

    #[test]
    fn short_descripcion_is_rejected() {
        let mut input = drama();
        input.descripcion = Some("corta".into());
        let errors = input.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "descripcion");
        assert_eq!(
            errors[0].message,
            "La descripcion debe tener entre 10 y 200 caracteres"
        );
    }

    #[test]
    fn missing_everything_reports_each_field_once_per_rule() {
        let errors = GeneroInput {
            nombre: None,
            descripcion: None,
            estado: None,
        }
        .validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["nombre", "descripcion", "estado"]);
    }
}
