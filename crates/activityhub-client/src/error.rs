//! Backend client error types

use thiserror::Error;

use activityhub_core::error::{AppError, ErrorKind};

/// Errors that can occur when talking to the REST backend
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response arrived, or the body was unreadable
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint or resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend answered with a non-success status
    #[error("Backend returned {status} for {path}")]
    Status { status: u16, path: String },

    /// The body was JSON but not a list
    #[error("Unexpected payload from {0}: expected a JSON array")]
    UnexpectedPayload(String),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let kind = match &err {
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::Status { .. } => ErrorKind::ExternalService,
            ClientError::UnexpectedPayload(_) => ErrorKind::Serialization,
            ClientError::Http(e) if e.is_timeout() || e.is_connect() => {
                ErrorKind::ServiceUnavailable
            }
            ClientError::Http(e) if e.is_decode() => ErrorKind::Serialization,
            ClientError::Http(_) => ErrorKind::ExternalService,
        };
        let message = err.to_string();
        AppError::with_source(kind, message, err)
    }
}
