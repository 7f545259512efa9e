use crate::types::DbId;

/// Domain error kinds returned by the reservation core.
///
/// Every variant carries enough structured detail for the presentation
/// layer to render a specific message; storage failures are wrapped in
/// `Internal` and never exposed raw.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed on {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: &'static str },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }
}
