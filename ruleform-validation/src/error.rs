// Error types for the validation engine

use thiserror::Error;

/// Setup-time errors. Validation failures are reported as `MessageGroup`s, not errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Invalid form data: {0}")]
    InvalidFormData(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
