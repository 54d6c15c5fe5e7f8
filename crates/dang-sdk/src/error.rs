//! SDK error types

use dang_compiler::CompileError;
use dang_repository::RepositoryError;
use thiserror::Error;

/// Failure of a batch, reported with the underlying message unchanged
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A decision failed validation or compilation
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The repository rejected a compiled decision
    #[error(transparent)]
    Persistence(#[from] RepositoryError),
}

impl ServiceError {
    /// Whether the failure was caused by the submitted specification
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Compile(_))
    }
}

/// Result type for SDK operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_message_is_verbatim() {
        let error = ServiceError::from(CompileError::OverlappingIntervals);
        assert_eq!(error.to_string(), "overlapping intervals");
        assert!(error.is_client_error());
    }

    #[test]
    fn test_persistence_error_message_is_verbatim() {
        let error = ServiceError::from(RepositoryError::Api(
            "http 400 Bad Request from document store - locked".to_string(),
        ));
        assert_eq!(
            error.to_string(),
            "http 400 Bad Request from document store - locked"
        );
        assert!(!error.is_client_error());
    }
}
