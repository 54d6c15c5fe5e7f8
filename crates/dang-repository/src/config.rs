//! Repository configuration types
//!
//! Selects where compiled decisions are persisted (file system, HTTP document
//! store, memory).

use serde::{Deserialize, Serialize};

/// Default directory for the file system backend
pub const DEFAULT_BASE_PATH: &str = "decisions";

/// Repository backend type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositorySource {
    /// One JSON document per decision on disk
    #[default]
    FileSystem,
    /// Remote JSON document store
    Api,
    /// Kept in process memory (for testing)
    Memory,
}

/// Repository configuration
///
/// # Examples
///
/// ```rust
/// use dang_repository::RepositoryConfig;
///
/// // File system repository
/// let config = RepositoryConfig::file_system("decisions");
///
/// // HTTP document store
/// let config = RepositoryConfig::api("http://localhost:8090");
///
/// // Memory repository (for testing)
/// let config = RepositoryConfig::memory();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Backend type
    #[serde(default)]
    pub source: RepositorySource,

    /// File system base path (required for FileSystem source)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Document store base URL (required for Api source)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self::file_system(DEFAULT_BASE_PATH)
    }
}

impl RepositoryConfig {
    /// Create a file system repository configuration
    pub fn file_system(path: impl Into<String>) -> Self {
        Self {
            source: RepositorySource::FileSystem,
            base_path: Some(path.into()),
            api_url: None,
        }
    }

    /// Create an HTTP document store configuration
    pub fn api(url: impl Into<String>) -> Self {
        Self {
            source: RepositorySource::Api,
            base_path: None,
            api_url: Some(url.into()),
        }
    }

    /// Create a memory repository configuration
    pub fn memory() -> Self {
        Self {
            source: RepositorySource::Memory,
            base_path: None,
            api_url: None,
        }
    }

    /// Validate the configuration
    ///
    /// Returns an error if required fields are missing for the selected source.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.source {
            RepositorySource::FileSystem => {
                if self.base_path.is_none() {
                    return Err(ConfigError::MissingField {
                        source: "FileSystem".to_string(),
                        field: "base_path".to_string(),
                    });
                }
            }
            RepositorySource::Api => {
                if self.api_url.is_none() {
                    return Err(ConfigError::MissingField {
                        source: "Api".to_string(),
                        field: "api_url".to_string(),
                    });
                }
            }
            RepositorySource::Memory => {}
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is missing for the selected source
    MissingField { source: String, field: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingField { source, field } => {
                write!(f, "{} source requires {} to be set", source, field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_system_config() {
        let config = RepositoryConfig::file_system("decisions");

        assert_eq!(config.source, RepositorySource::FileSystem);
        assert_eq!(config.base_path, Some("decisions".to_string()));
        assert!(config.api_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_config() {
        let config = RepositoryConfig::api("http://localhost:8090");

        assert_eq!(config.source, RepositorySource::Api);
        assert_eq!(config.api_url, Some("http://localhost:8090".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_writes_to_decisions_dir() {
        let config = RepositoryConfig::default();
        assert_eq!(config.source, RepositorySource::FileSystem);
        assert_eq!(config.base_path.as_deref(), Some(DEFAULT_BASE_PATH));
    }

    #[test]
    fn test_validation_missing_fields() {
        let config = RepositoryConfig {
            source: RepositorySource::Api,
            base_path: Some("decisions".to_string()),
            api_url: None,
        };
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Api source requires api_url to be set"
        );

        let config = RepositoryConfig {
            source: RepositorySource::FileSystem,
            base_path: None,
            api_url: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_lowercase_source() {
        let config: RepositoryConfig =
            serde_json::from_str(r#"{"source": "api", "api_url": "http://store"}"#).unwrap();
        assert_eq!(config, RepositoryConfig::api("http://store"));

        let config: RepositoryConfig = serde_json::from_str(r#"{"source": "memory"}"#).unwrap();
        assert_eq!(config.source, RepositorySource::Memory);
    }
}
