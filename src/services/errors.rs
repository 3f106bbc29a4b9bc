use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The referenced entity does not exist.
    #[error("not found")]
    NotFound,

    /// Submitted payload is missing a required field.
    #[error("{0}")]
    Form(String),

    /// A submitted value violates a domain constraint.
    #[error("{0}")]
    TypeConstraint(String),

    /// Any fault raised by the store.
    #[error(transparent)]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation { .. } => ServiceError::Form(err.to_string()),
            FormError::TypeConstraint(inner) => inner.into(),
        }
    }
}
