//! Error types for the repository layer

use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur while persisting decisions
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Decision could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Decision name cannot be used as a storage key
    #[error("Invalid decision name: '{name}'")]
    InvalidName { name: String },

    /// Document store rejected the request; the message is surfaced as-is
    #[error("{0}")]
    Api(String),

    /// Repository configuration is incomplete
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}
