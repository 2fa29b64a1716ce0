// Error types for the ghorg client.
// Covers nested lookups, argument checks, transport failures and fixture loading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhOrgError {
    #[error("Key not found: '{0}'")]
    KeyNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No replay payload registered for {0}")]
    NoReplay(String),

    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GhOrgError>;
