//! JSON payloads accepted by the API routes.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::TypeConstraintError;

pub mod clients;
pub mod leads;
pub mod notes;

#[derive(Debug, Error)]
/// Errors that can occur when processing a request payload.
pub enum FormError {
    #[error("{message}")]
    Validation {
        message: &'static str,
        #[source]
        source: ValidationErrors,
    },

    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),
}

/// Rejects strings that contain nothing but whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
