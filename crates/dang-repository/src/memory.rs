//! In-memory repository implementation

use async_trait::async_trait;
use dang_core::Decision;
use tokio::sync::RwLock;

use crate::error::RepositoryResult;
use crate::traits::DecisionRepository;

/// Keeps every inserted decision in insertion order
///
/// Re-inserting a name appends a new entry rather than replacing the old one,
/// so tests can observe exactly how often `insert` ran.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    decisions: RwLock<Vec<Decision>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all inserted decisions
    pub async fn decisions(&self) -> Vec<Decision> {
        self.decisions.read().await.clone()
    }

    /// Most recent decision stored under `name`
    pub async fn get(&self, name: &str) -> Option<Decision> {
        self.decisions
            .read()
            .await
            .iter()
            .rev()
            .find(|decision| decision.name == name)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.decisions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.decisions.read().await.is_empty()
    }
}

#[async_trait]
impl DecisionRepository for MemoryRepository {
    async fn insert(&self, decision: &Decision) -> RepositoryResult<()> {
        self.decisions.write().await.push(decision.clone());
        tracing::debug!(decision = decision.name.as_str(), "Stored decision in memory");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
