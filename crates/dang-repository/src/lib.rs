//! Persistence layer for compiled DANG decisions
//!
//! Every compiled decision is handed to a [`DecisionRepository`] exactly
//! once. Three backends are provided:
//!
//! - **File System**: one pretty-printed JSON document per decision
//! - **HTTP Document Store**: `POST /json/write` against a remote store
//!   (feature `api`)
//! - **Memory**: in-process storage for tests
//!
//! # Quick Start
//!
//! ```no_run
//! use dang_core::Decision;
//! use dang_repository::{DecisionRepository, FileSystemRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = FileSystemRepository::new("decisions")?;
//!
//!     let decision = Decision {
//!         name: "pricing".to_string(),
//!         input_form: Vec::new(),
//!         output_form: Vec::new(),
//!     };
//!     repo.insert(&decision).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod file_system;
pub mod loader;
pub mod memory;
pub mod traits;

#[cfg(feature = "api")]
pub mod api;

// Re-exports - Configuration
pub use config::{ConfigError, RepositoryConfig, RepositorySource};

// Re-exports - Loader
pub use loader::RepositoryLoader;

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Repositories
pub use file_system::FileSystemRepository;
pub use memory::MemoryRepository;
pub use traits::DecisionRepository;

#[cfg(feature = "api")]
pub use api::ApiRepository;
