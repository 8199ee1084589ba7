//! Media entity model, request payloads, and populated read shapes.

use mediateca_core::types::{DbId, Timestamp};
use mediateca_core::validation::{self, FieldError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `medias` table.
///
/// Reference columns serialize under the original wire names (`genero`,
/// `director`, ...) as raw ids; populated response shapes live in
/// [`PopulatedMedia`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub serial: String,
    pub titulo: String,
    pub sinopsis: String,
    pub url: String,
    #[serde(rename = "urlImagen")]
    pub url_imagen: Option<String>,
    #[serde(rename = "año")]
    pub anio: i32,
    pub estado: String,
    #[serde(rename = "genero")]
    pub genero_id: DbId,
    #[serde(rename = "director")]
    pub director_id: DbId,
    #[serde(rename = "productora")]
    pub productora_id: DbId,
    #[serde(rename = "tipo")]
    pub tipo_id: DbId,
    #[serde(rename = "fechaCreacion")]
    pub fecha_creacion: Timestamp,
    #[serde(rename = "fechaActualizacion")]
    pub fecha_actualizacion: Timestamp,
}

/// Payload for creating a media document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMedia {
    pub serial: Option<String>,
    pub titulo: Option<String>,
    pub sinopsis: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlImagen")]
    pub url_imagen: Option<String>,
    #[serde(rename = "año")]
    pub anio: Option<i32>,
    pub genero: Option<DbId>,
    pub director: Option<DbId>,
    pub productora: Option<DbId>,
    pub tipo: Option<DbId>,
}

impl CreateMedia {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        validation::required(
            &mut errors,
            "serial",
            self.serial.as_deref(),
            "El serial es obligatorio",
        );
        validation::length_range(
            &mut errors,
            "serial",
            self.serial.as_deref(),
            3,
            50,
            "El serial debe tener entre 3 y 50 caracteres",
        );
        validation::required(
            &mut errors,
            "titulo",
            self.titulo.as_deref(),
            "El título es obligatorio",
        );
        validation::length_range(
            &mut errors,
            "titulo",
            self.titulo.as_deref(),
            2,
            100,
            "El título debe tener entre 2 y 100 caracteres",
        );
        validation::required(
            &mut errors,
            "sinopsis",
            self.sinopsis.as_deref(),
            "La sinopsis es obligatoria",
        );
        validation::length_range(
            &mut errors,
            "sinopsis",
            self.sinopsis.as_deref(),
            10,
            500,
            "La sinopsis debe tener entre 10 y 500 caracteres",
        );
        validation::required(
            &mut errors,
            "url",
            self.url.as_deref(),
            "La URL es obligatoria",
        );
        validation::valid_url(
            &mut errors,
            "url",
            self.url.as_deref(),
            "La URL debe tener un formato válido",
        );
        validation::valid_url(
            &mut errors,
            "urlImagen",
            self.url_imagen.as_deref(),
            "La URL de imagen debe tener un formato válido",
        );
        if self.anio.is_none() {
            errors.push(FieldError::new("año", "El año es obligatorio"));
        }
        validation::valid_anio(
            &mut errors,
            "año",
            self.anio,
            "El año debe ser un número entre 1900 y el año actual",
        );
        validation::required_id(
            &mut errors,
            "genero",
            self.genero,
            "El género es obligatorio",
        );
        validation::required_id(
            &mut errors,
            "director",
            self.director,
            "El director es obligatorio",
        );
        validation::required_id(
            &mut errors,
            "productora",
            self.productora,
            "La productora es obligatoria",
        );
        validation::required_id(&mut errors, "tipo", self.tipo, "El tipo es obligatorio");
        errors
    }
}

/// Payload for partially updating a media document. Every field optional,
/// but constrained identically to create when present.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMedia {
    pub serial: Option<String>,
    pub titulo: Option<String>,
    pub sinopsis: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlImagen")]
    pub url_imagen: Option<String>,
    #[serde(rename = "año")]
    pub anio: Option<i32>,
    pub estado: Option<String>,
    pub genero: Option<DbId>,
    pub director: Option<DbId>,
    pub productora: Option<DbId>,
    pub tipo: Option<DbId>,
}

impl UpdateMedia {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        validation::length_range(
            &mut errors,
            "serial",
            self.serial.as_deref(),
            3,
            50,
            "El serial debe tener entre 3 y 50 caracteres",
        );
        validation::length_range(
            &mut errors,
            "titulo",
            self.titulo.as_deref(),
            2,
            100,
            "El título debe tener entre 2 y 100 caracteres",
        );
        validation::length_range(
            &mut errors,
            "sinopsis",
            self.sinopsis.as_deref(),
            10,
            500,
            "La sinopsis debe tener entre 10 y 500 caracteres",
        );
        validation::valid_url(
            &mut errors,
            "url",
            self.url.as_deref(),
            "La URL debe tener un formato válido",
        );
        validation::valid_url(
            &mut errors,
            "urlImagen",
            self.url_imagen.as_deref(),
            "La URL de imagen debe tener un formato válido",
        );
        validation::valid_anio(
            &mut errors,
            "año",
            self.anio,
            "El año debe ser un número entre 1900 y el año actual",
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

/// Optional filters for the general media listing, combined with AND.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaFilter {
    pub genero: Option<DbId>,
    pub director: Option<DbId>,
    pub tipo: Option<DbId>,
}

/// Flat row produced by the populate query: the media columns plus the
/// joined display fields of each referenced entity. Joined fields are
/// `Option` because the joins are LEFT: a dangling reference resolves to
/// `None` and serializes as a `null` reference, not an error.
#[derive(Debug, Clone, FromRow)]
pub struct PopulatedMediaRow {
    #[sqlx(flatten)]
    pub media: Media,
    pub genero_nombre: Option<String>,
    pub genero_descripcion: Option<String>,
    pub genero_estado: Option<String>,
    pub director_nombre: Option<String>,
    pub director_estado: Option<String>,
    pub productora_nombre: Option<String>,
    pub productora_slogan: Option<String>,
    pub productora_descripcion: Option<String>,
    pub productora_estado: Option<String>,
    pub tipo_nombre: Option<String>,
    pub tipo_descripcion: Option<String>,
}

/// Genre projection inside a populated media response.
#[derive(Debug, Clone, Serialize)]
pub struct GeneroRef {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

/// Director projection inside a populated media response.
#[derive(Debug, Clone, Serialize)]
pub struct DirectorRef {
    pub id: DbId,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

/// Studio projection inside a populated media response.
#[derive(Debug, Clone, Serialize)]
pub struct ProductoraRef {
    pub id: DbId,
    pub nombre: String,
    pub slogan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

/// Content type projection inside a populated media response.
#[derive(Debug, Clone, Serialize)]
pub struct TipoRef {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: String,
}

/// Media document with its references resolved for response bodies.
#[derive(Debug, Clone, Serialize)]
pub struct PopulatedMedia {
    pub id: DbId,
    pub serial: String,
    pub titulo: String,
    pub sinopsis: String,
    pub url: String,
    #[serde(rename = "urlImagen")]
    pub url_imagen: Option<String>,
    #[serde(rename = "año")]
    pub anio: i32,
    pub estado: String,
    pub genero: Option<GeneroRef>,
    pub director: Option<DirectorRef>,
    pub productora: Option<ProductoraRef>,
    pub tipo: Option<TipoRef>,
    #[serde(rename = "fechaCreacion")]
    pub fecha_creacion: Timestamp,
    #[serde(rename = "fechaActualizacion")]
    pub fecha_actualizacion: Timestamp,
}

impl PopulatedMediaRow {
    /// Listing/create/update projection: display fields only.
    pub fn into_shallow(self) -> PopulatedMedia {
        self.into_populated(false)
    }

    /// Get-by-id projection: adds the referenced entities' `estado` (and the
    /// studio's `descripcion`).
    pub fn into_deep(self) -> PopulatedMedia {
        self.into_populated(true)
    }

    fn into_populated(self, deep: bool) -> PopulatedMedia {
        let genero = self.genero_nombre.map(|nombre| GeneroRef {
            id: self.media.genero_id,
            nombre,
            descripcion: self.genero_descripcion.unwrap_or_default(),
            estado: if deep { self.genero_estado } else { None },
        });
        let director = self.director_nombre.map(|nombre| DirectorRef {
            id: self.media.director_id,
            nombre,
            estado: if deep { self.director_estado } else { None },
        });
        let productora = self.productora_nombre.map(|nombre| ProductoraRef {
            id: self.media.productora_id,
            nombre,
            slogan: self.productora_slogan.unwrap_or_default(),
            descripcion: if deep { self.productora_descripcion } else { None },
            estado: if deep { self.productora_estado } else { None },
        });
        let tipo = self.tipo_nombre.map(|nombre| TipoRef {
            id: self.media.tipo_id,
            nombre,
            descripcion: self.tipo_descripcion.unwrap_or_default(),
        });

        PopulatedMedia {
            id: self.media.id,
            serial: self.media.serial,
            titulo: self.media.titulo,
            sinopsis: self.media.sinopsis,
            url: self.media.url,
            url_imagen: self.media.url_imagen,
            anio: self.media.anio,
            estado: self.media.estado,
            genero,
            director,
            productora,
            tipo,
            fecha_creacion: self.media.fecha_creacion,
            fecha_actualizacion: self.media.fecha_actualizacion,
        }
    }
}
