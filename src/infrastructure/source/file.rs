use crate::core::errors::SplitviewError;
use crate::infrastructure::source::TransactionSource;
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Reads a saved `/transactions` response from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

#[async_trait]
impl TransactionSource for FileSource {
    async fn fetch(&self) -> Result<Value, SplitviewError> {
        debug!("Reading transactions from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SplitviewError::SourceError(format!("Failed to read {}: {}", self.path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| SplitviewError::MalformedPayload(format!("{} is not valid JSON: {}", self.path.display(), e)))
    }
}
