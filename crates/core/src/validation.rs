//! Request validation rules.
//!
//! Pure functions over already-deserialized input; no store access. Each
//! helper appends at most one [`FieldError`] per call, so the order of the
//! resulting list follows the order in which a DTO applies its rules.
//! Checks are independent of each other: a blank required field that also
//! violates a length bound reports both.

use chrono::Datelike;
use serde::Serialize;

use crate::types::DbId;

/// The two admissible `estado` values.
pub const ESTADOS: [&str; 2] = ["activo", "inactivo"];

/// Lower bound for `año` on media documents.
pub const MIN_ANIO: i32 = 1900;

/// A single field-level rule violation, serialized as `{field, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The current calendar year (UTC), the ceiling for `año`.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// The value must be present and not blank.
pub fn required(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<&str>,
    message: &str,
) {
    if value.is_none_or(|v| v.trim().is_empty()) {
        errors.push(FieldError::new(field, message));
    }
}

/// A reference id must be present.
pub fn required_id(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<DbId>,
    message: &str,
) {
    if value.is_none() {
        errors.push(FieldError::new(field, message));
    }
}

/// When present, the value's character count must fall within `min..=max`.
pub fn length_range(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
    message: &str,
) {
    if let Some(v) = value {
        let len = v.chars().count();
        if len < min || len > max {
            errors.push(FieldError::new(field, message));
        }
    }
}

/// When present, the value must be one of [`ESTADOS`].
pub fn valid_estado(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<&str>,
    message: &str,
) {
    if let Some(v) = value {
        if !ESTADOS.contains(&v) {
            errors.push(FieldError::new(field, message));
        }
    }
}

/// When present, the value must parse as an absolute http(s) URL with a host.
pub fn valid_url(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<&str>,
    message: &str,
) {
    if let Some(v) = value {
        let ok = url::Url::parse(v)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
            .unwrap_or(false);
        if !ok {
            errors.push(FieldError::new(field, message));
        }
    }
}

/// When present, the year must fall within `[MIN_ANIO, current calendar year]`.
pub fn valid_anio(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<i32>,
    message: &str,
) {
    if let Some(a) = value {
        if a < MIN_ANIO || a > current_year() {
            errors.push(FieldError::new(field, message));
        }
    }
}
