//! Repository construction from server configuration

use anyhow::Result;
use dang_repository::{DecisionRepository, RepositoryConfig, RepositoryLoader};
use std::sync::Arc;
use tracing::info;

use crate::config::RepositoryType;

/// Translate the server's repository setting into a repository configuration
pub fn repository_config(repository: &RepositoryType) -> RepositoryConfig {
    match repository {
        RepositoryType::FileSystem { path } => {
            RepositoryConfig::file_system(path.to_string_lossy())
        }
        RepositoryType::Api { base_url } => RepositoryConfig::api(base_url.clone()),
        RepositoryType::Memory => RepositoryConfig::memory(),
    }
}

/// Open the repository compiled decisions are written to
pub fn open_repository(repository: &RepositoryType) -> Result<Arc<dyn DecisionRepository>> {
    match repository {
        RepositoryType::FileSystem { path } => {
            info!("Writing decisions to file system repository: {:?}", path)
        }
        RepositoryType::Api { base_url } => {
            info!("Writing decisions to document store at {}", base_url)
        }
        RepositoryType::Memory => info!("Keeping decisions in memory"),
    }

    RepositoryLoader::new(repository_config(repository))
        .open()
        .map_err(|e| anyhow::anyhow!("Failed to open repository: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dang_repository::RepositorySource;
    use std::path::PathBuf;

    #[test]
    fn test_repository_config_mapping() {
        let config = repository_config(&RepositoryType::FileSystem {
            path: PathBuf::from("out"),
        });
        assert_eq!(config, RepositoryConfig::file_system("out"));

        let config = repository_config(&RepositoryType::Api {
            base_url: "http://store".to_string(),
        });
        assert_eq!(config.source, RepositorySource::Api);

        let config = repository_config(&RepositoryType::Memory);
        assert_eq!(config, RepositoryConfig::memory());
    }

    #[test]
    fn test_open_memory_repository() {
        let repository = open_repository(&RepositoryType::Memory).unwrap();
        assert_eq!(repository.backend(), "memory");
    }
}
