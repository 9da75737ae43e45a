//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors returned by Chef API calls.
///
/// `NotFound` carries the request path relative to the organization URL.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Chef server unreachable: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Chef server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("No such Chef object at {resource}")]
    NotFound { resource: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
