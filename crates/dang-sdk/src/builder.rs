//! Builder pattern for DecisionService

use crate::error::ServiceResult;
use crate::service::DecisionService;
use dang_compiler::CompilerOptions;
use dang_repository::{DecisionRepository, RepositoryConfig, RepositoryLoader};
use std::sync::Arc;

/// Builder for DecisionService
///
/// # Example
///
/// ```rust
/// use dang_sdk::{DecisionServiceBuilder, RepositoryConfig};
///
/// let service = DecisionServiceBuilder::new()
///     .with_repository_config(RepositoryConfig::memory())
///     .reject_unknown_rules(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct DecisionServiceBuilder {
    repository_config: Option<RepositoryConfig>,
    repository: Option<Arc<dyn DecisionRepository>>,
    options: CompilerOptions,
}

impl DecisionServiceBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the repository described by `config` when building
    pub fn with_repository_config(mut self, config: RepositoryConfig) -> Self {
        self.repository_config = Some(config);
        self
    }

    /// Use an already constructed repository; takes precedence over
    /// `with_repository_config`
    pub fn with_repository(mut self, repository: Arc<dyn DecisionRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_compiler_options(mut self, options: CompilerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn reject_unknown_rules(mut self, reject: bool) -> Self {
        self.options.reject_unknown_rules = reject;
        self
    }

    /// Build the service
    ///
    /// Without any repository setting the default file system repository is
    /// opened.
    pub fn build(self) -> ServiceResult<DecisionService> {
        let repository = match self.repository {
            Some(repository) => repository,
            None => {
                let config = self.repository_config.unwrap_or_default();
                RepositoryLoader::new(config).open()?
            }
        };

        Ok(DecisionService::with_options(repository, self.options))
    }
}
