use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Resolution error: {0}")]
    ResolutionError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NotFound(msg) => ApplicationError::NotFound(msg),
            DomainError::InvalidData(msg) => ApplicationError::ValidationError(msg),
            DomainError::ResolutionFailed(msg) => ApplicationError::ResolutionError(msg),
            DomainError::InternalError(msg) => ApplicationError::InternalError(msg),
        }
    }
}
