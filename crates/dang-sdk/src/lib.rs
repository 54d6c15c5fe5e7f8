//! DANG SDK
//!
//! High-level API for compiling batches of decision specifications and
//! persisting the compiled decisions.
//!
//! ```rust
//! use dang_sdk::{DecisionServiceBuilder, RepositoryConfig, SaveDecisionRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = DecisionServiceBuilder::new()
//!     .with_repository_config(RepositoryConfig::memory())
//!     .build()?;
//!
//! let request: SaveDecisionRequest = serde_json::from_str(r#"{"decisions": []}"#)?;
//! service.compile_batch(&request).await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod service;

// Re-export main types
pub use builder::DecisionServiceBuilder;
pub use error::{ServiceError, ServiceResult};
pub use service::DecisionService;

// Re-export commonly used types from dependencies
pub use dang_compiler::{CompileError, CompilerOptions};
pub use dang_core::{Decision, DecisionRequest, SaveDecisionRequest};
pub use dang_repository::{DecisionRepository, RepositoryConfig, RepositoryError};
