pub mod file;
pub mod in_memory;

use crate::core::errors::SplitviewError;
use async_trait::async_trait;

/// Supplies the raw transaction list, already parsed from JSON.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch(&self) -> Result<serde_json::Value, SplitviewError>;
}
