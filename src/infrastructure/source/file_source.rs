//! JSON file implementation of the rule source.

use async_trait::async_trait;
use serde_json::json;
use std::path::PathBuf;

use crate::domain::entities::RuleRecord;
use crate::domain::repositories::RuleSource;
use crate::error::AppError;

/// Rule source backed by a JSON file.
///
/// The file holds a JSON array of rule records in precedence order and
/// is re-read on every fetch, so edits become visible at the next cache
/// refresh without a restart.
///
/// # Use Cases
///
/// - Deployments without a database
/// - Development and integration tests
pub struct FileRuleSource {
    path: PathBuf,
}

impl FileRuleSource {
    /// Creates a source reading from the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RuleSource for FileRuleSource {
    async fn fetch_rules(&self) -> Result<Vec<RuleRecord>, AppError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::unavailable(
                "Failed to read rules file",
                json!({ "path": self.path.display().to_string(), "reason": e.to_string() }),
            )
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::internal(
                "Rules file is not a valid JSON rule list",
                json!({ "path": self.path.display().to_string(), "reason": e.to_string() }),
            )
        })
    }
}
