use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Account resolution failed: {0}")]
    ResolutionFailed(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
