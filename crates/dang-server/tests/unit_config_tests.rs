//! Unit tests for ServerConfig loading
//!
//! Environment variables are process-wide, so every override is exercised
//! from a single test.

use dang_server::config::{RepositoryType, ServerConfig};
use std::path::PathBuf;

const OVERRIDES: [(&str, &str); 4] = [
    ("DANG_PORT", "9001"),
    ("DANG_LOG_LEVEL", "debug"),
    ("DANG_REPOSITORY__TYPE", "memory"),
    ("DANG_COMPILER__REJECT_UNKNOWN_RULES", "true"),
];

#[test]
fn test_load_applies_environment_overrides() {
    for (key, _) in OVERRIDES {
        std::env::remove_var(key);
    }

    let config = ServerConfig::load().unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(
        config.repository,
        RepositoryType::FileSystem {
            path: PathBuf::from("decisions")
        }
    );

    for (key, value) in OVERRIDES {
        std::env::set_var(key, value);
    }

    let config = ServerConfig::load();

    for (key, _) in OVERRIDES {
        std::env::remove_var(key);
    }

    let config = config.unwrap();
    assert_eq!(config.port, 9001);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.repository, RepositoryType::Memory);
    assert!(config.compiler.reject_unknown_rules);
    assert_eq!(config.host, "127.0.0.1");
}
