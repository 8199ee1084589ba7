use crate::types::DbId;

/// Domain-level error taxonomy shared by every layer above the store.
///
/// The HTTP crate maps each variant onto a status code and JSON body; see
/// `mediateca_api::error`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An id did not resolve to an existing row.
    #[error("{entity} con id {id} no encontrado")]
    NotFound { entity: &'static str, id: DbId },

    /// A request failed a domain rule outside the per-field validation path.
    #[error("Validación fallida: {0}")]
    Validation(String),

    /// A uniqueness or referential conflict detected by the application.
    #[error("Conflicto: {0}")]
    Conflict(String),

    /// Any other unrecoverable domain failure.
    #[error("Error interno: {0}")]
    Internal(String),
}
