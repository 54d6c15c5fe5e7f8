//! Repository construction from configuration

use std::sync::Arc;

use crate::config::{RepositoryConfig, RepositorySource};
use crate::error::{RepositoryError, RepositoryResult};
use crate::file_system::FileSystemRepository;
use crate::memory::MemoryRepository;
use crate::traits::DecisionRepository;

/// Opens the backend selected by a [`RepositoryConfig`]
///
/// # Example
///
/// ```rust
/// use dang_repository::{DecisionRepository, RepositoryConfig, RepositoryLoader};
///
/// let repository = RepositoryLoader::new(RepositoryConfig::memory()).open().unwrap();
/// assert_eq!(repository.backend(), "memory");
/// ```
pub struct RepositoryLoader {
    config: RepositoryConfig,
}

impl RepositoryLoader {
    pub fn new(config: RepositoryConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration and construct the repository
    pub fn open(&self) -> RepositoryResult<Arc<dyn DecisionRepository>> {
        self.config
            .validate()
            .map_err(|e| RepositoryError::Config(e.to_string()))?;

        let repository: Arc<dyn DecisionRepository> = match self.config.source {
            RepositorySource::FileSystem => {
                let base_path = self.config.base_path.as_deref().ok_or_else(|| {
                    RepositoryError::Config("base_path required for FileSystem source".to_string())
                })?;
                Arc::new(FileSystemRepository::new(base_path)?)
            }
            RepositorySource::Api => self.open_api()?,
            RepositorySource::Memory => Arc::new(MemoryRepository::new()),
        };

        tracing::info!(backend = repository.backend(), "Opened decision repository");
        Ok(repository)
    }

    #[cfg(feature = "api")]
    fn open_api(&self) -> RepositoryResult<Arc<dyn DecisionRepository>> {
        let api_url = self.config.api_url.as_deref().ok_or_else(|| {
            RepositoryError::Config("api_url required for Api source".to_string())
        })?;
        Ok(Arc::new(crate::api::ApiRepository::new(api_url)?))
    }

    #[cfg(not(feature = "api"))]
    fn open_api(&self) -> RepositoryResult<Arc<dyn DecisionRepository>> {
        Err(RepositoryError::Config(
            "Api source requires the 'api' feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory() {
        let repository = RepositoryLoader::new(RepositoryConfig::memory())
            .open()
            .unwrap();
        assert_eq!(repository.backend(), "memory");
    }

    #[test]
    fn test_open_file_system() {
        let dir = tempfile::tempdir().unwrap();
        let config = RepositoryConfig::file_system(dir.path().to_string_lossy());
        let repository = RepositoryLoader::new(config).open().unwrap();
        assert_eq!(repository.backend(), "filesystem");
    }

    #[test]
    fn test_open_rejects_invalid_config() {
        let config = RepositoryConfig {
            base_path: None,
            ..RepositoryConfig::default()
        };
        let result = RepositoryLoader::new(config).open();
        assert!(matches!(result, Err(RepositoryError::Config(_))));
    }
}
