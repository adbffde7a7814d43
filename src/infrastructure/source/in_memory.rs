use crate::core::errors::SplitviewError;
use crate::infrastructure::source::TransactionSource;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemorySource {
    payload: Arc<RwLock<Result<Value, String>>>,
}

impl InMemorySource {
    pub fn new(payload: Value) -> Self {
        InMemorySource {
            payload: Arc::new(RwLock::new(Ok(payload))),
        }
    }

    pub async fn replace(&self, payload: Value) {
        *self.payload.write().await = Ok(payload);
    }

    /// Makes every following fetch fail with `message`.
    pub async fn fail_with(&self, message: &str) {
        *self.payload.write().await = Err(message.to_string());
    }
}

#[async_trait]
impl TransactionSource for InMemorySource {
    async fn fetch(&self) -> Result<Value, SplitviewError> {
        match &*self.payload.read().await {
            Ok(payload) => Ok(payload.clone()),
            Err(message) => Err(SplitviewError::SourceError(message.clone())),
        }
    }
}
