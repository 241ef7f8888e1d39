// Central Error Type for the Configuration Layer
//
// Defaulting itself is total and cannot fail; errors come from the
// surrounding concerns (parsing raw input, resolving the consume list).

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown pipeline in consume list: {0}")]
    UnknownPipeline(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
