//! Server configuration

use dang_compiler::CompilerOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where compiled decisions are persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RepositoryType {
    /// One JSON document per decision on disk
    FileSystem {
        /// Output directory (default: "decisions")
        #[serde(default = "default_repository_path")]
        path: PathBuf,
    },
    /// Remote JSON document store
    Api {
        /// Base URL of the store
        base_url: String,
    },
    /// Process memory, lost on shutdown
    Memory,
}

fn default_repository_path() -> PathBuf {
    PathBuf::from(dang_repository::config::DEFAULT_BASE_PATH)
}

impl Default for RepositoryType {
    fn default() -> Self {
        RepositoryType::FileSystem {
            path: default_repository_path(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Repository configuration for compiled decisions
    pub repository: RepositoryType,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Rule compiler options
    pub compiler: CompilerOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            repository: RepositoryType::default(),
            log_level: "info".to_string(),
            compiler: CompilerOptions::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// `config/server.{toml,yaml,json}` is optional; `DANG_*` variables
    /// override it, with `__` separating nested keys
    /// (`DANG_PORT=9000`, `DANG_REPOSITORY__TYPE=memory`).
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(
                config::Environment::with_prefix("DANG")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config: {}", e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Socket address to bind
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert!(!config.compiler.reject_unknown_rules);
        assert_eq!(
            config.repository,
            RepositoryType::FileSystem {
                path: PathBuf::from("decisions")
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"port": 9000, "repository": {"type": "memory"}}"#).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.repository, RepositoryType::Memory);
    }
}
