//! DecisionService - compiles decision batches and persists the results

use crate::error::ServiceResult;
use dang_compiler::{Compiler, CompilerOptions, DecisionAssembler};
use dang_core::{Decision, SaveDecisionRequest};
use dang_repository::DecisionRepository;
use std::sync::Arc;

/// Drives the assembler and the repository over a batch
///
/// Batches are processed in order and stop at the first failure. Decisions
/// inserted before the failure stay inserted.
#[derive(Clone)]
pub struct DecisionService {
    assembler: DecisionAssembler,
    repository: Arc<dyn DecisionRepository>,
}

impl DecisionService {
    /// Create a service with the default compiler options
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self::with_options(repository, CompilerOptions::default())
    }

    pub fn with_options(repository: Arc<dyn DecisionRepository>, options: CompilerOptions) -> Self {
        Self {
            assembler: DecisionAssembler::with_compiler(Compiler::with_options(options)),
            repository,
        }
    }

    pub fn repository(&self) -> &Arc<dyn DecisionRepository> {
        &self.repository
    }

    pub fn compiler_options(&self) -> &CompilerOptions {
        self.assembler.compiler().options()
    }

    /// Compile every decision of `request` and insert each one as soon as it
    /// compiles.
    ///
    /// Returns the first compilation or persistence failure; later decisions
    /// are neither compiled nor inserted.
    pub async fn compile_batch(&self, request: &SaveDecisionRequest) -> ServiceResult<()> {
        let total = request.decisions.len();
        tracing::info!(
            decisions = total,
            backend = self.repository.backend(),
            "Compiling decision batch"
        );

        for (index, decision_request) in request.decisions.iter().enumerate() {
            let decision = self.assembler.assemble(decision_request).map_err(|e| {
                tracing::warn!(
                    decision = decision_request.name.as_str(),
                    index,
                    error = %e,
                    "Decision failed to compile"
                );
                e
            })?;

            self.repository.insert(&decision).await.map_err(|e| {
                tracing::error!(
                    decision = decision.name.as_str(),
                    index,
                    error = %e,
                    "Failed to persist decision"
                );
                e
            })?;

            tracing::debug!(decision = decision.name.as_str(), index, "Persisted decision");
        }

        tracing::info!(decisions = total, "Decision batch persisted");
        Ok(())
    }

    /// Compile a batch without persisting anything
    pub fn dry_run(&self, request: &SaveDecisionRequest) -> ServiceResult<Vec<Decision>> {
        Ok(self.assembler.assemble_batch(request)?)
    }
}

impl std::fmt::Debug for DecisionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionService")
            .field("assembler", &self.assembler)
            .field("backend", &self.repository.backend())
            .finish()
    }
}
