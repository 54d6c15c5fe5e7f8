//! The persistence collaborator interface
//!
//! The service hands every successfully compiled decision to a
//! [`DecisionRepository`], once, in batch order.

use async_trait::async_trait;
use dang_core::Decision;

use crate::error::RepositoryResult;

/// Storage for compiled decisions
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Persist a decision.
    ///
    /// Whether an earlier decision with the same name is replaced or kept
    /// alongside is up to the backend.
    async fn insert(&self, decision: &Decision) -> RepositoryResult<()>;

    /// Short backend name used in log output
    fn backend(&self) -> &'static str;
}
