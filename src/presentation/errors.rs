use serde::Serialize;
use thiserror::Error;

use crate::application::errors::ApplicationError;

/// Error shape handed to the transport layer.
///
/// The transport itself is out of scope for this crate; this type pins the
/// status contract so every front end maps outcomes the same way.
#[derive(Error, Debug, Serialize)]
pub enum CommandError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl CommandError {
    /// The HTTP status this error maps to
    pub fn status_code(&self) -> u16 {
        match self {
            CommandError::BadRequest(_) => 400,
            CommandError::NotFound(_) => 404,
            CommandError::InternalServerError(_) => 500,
        }
    }
}

impl From<ApplicationError> for CommandError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::ValidationError(msg) => CommandError::BadRequest(msg),
            ApplicationError::NotFound(msg) => CommandError::NotFound(msg),
            ApplicationError::ResolutionError(msg) => CommandError::InternalServerError(msg),
            ApplicationError::InternalError(msg) => CommandError::InternalServerError(msg),
        }
    }
}
