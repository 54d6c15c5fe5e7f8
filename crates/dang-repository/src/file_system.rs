//! File system based repository implementation
//!
//! Each decision is written to `<root>/<name>.json` as pretty-printed JSON.

use async_trait::async_trait;
use dang_core::Decision;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{RepositoryError, RepositoryResult};
use crate::traits::DecisionRepository;

/// File system based repository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    /// Absolute directory holding the decision documents
    root_path: PathBuf,
}

impl FileSystemRepository {
    /// Create a new file system repository
    ///
    /// The directory does not need to exist yet; it is created on the first
    /// insert.
    ///
    /// # Example
    /// ```no_run
    /// use dang_repository::FileSystemRepository;
    ///
    /// let repo = FileSystemRepository::new("decisions").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(root_path: P) -> RepositoryResult<Self> {
        let abs_path = root_path
            .as_ref()
            .absolutize()
            .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
            .to_path_buf();

        Ok(Self {
            root_path: abs_path,
        })
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Path of the document stored for `name`
    pub fn document_path(&self, name: &str) -> RepositoryResult<PathBuf> {
        validate_name(name)?;
        Ok(self.root_path.join(format!("{}.json", name)))
    }

    /// Read back a stored decision
    pub async fn load_decision(&self, name: &str) -> RepositoryResult<Decision> {
        let path = self.document_path(name)?;
        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// A name must be usable as a single file name inside the root
fn validate_name(name: &str) -> RepositoryResult<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains("..")
        || name.contains('\0');

    if invalid {
        return Err(RepositoryError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl DecisionRepository for FileSystemRepository {
    async fn insert(&self, decision: &Decision) -> RepositoryResult<()> {
        let path = self.document_path(&decision.name)?;
        let content = serde_json::to_string_pretty(decision)?;

        fs::create_dir_all(&self.root_path).await?;
        fs::write(&path, content).await?;

        tracing::debug!(
            decision = decision.name.as_str(),
            path = %path.display(),
            "Wrote decision document"
        );
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("pricing").is_ok());
        assert!(validate_name("pricing.v2").is_ok());

        for name in ["", ".", "..", "a/b", "a\\b", "../x", "a..b"] {
            assert!(
                matches!(validate_name(name), Err(RepositoryError::InvalidName { .. })),
                "'{}' should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_new_absolutizes_root() {
        let repo = FileSystemRepository::new("decisions").unwrap();
        assert!(repo.root_path().is_absolute());
        assert!(repo.root_path().ends_with("decisions"));
    }
}
