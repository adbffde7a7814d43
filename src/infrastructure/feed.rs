use crate::constants::REFRESH_SUPERSEDED;
use crate::core::decode::{TransactionBatch, decode_transactions};
use crate::core::errors::SplitviewError;
use crate::infrastructure::source::TransactionSource;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied { generation: u64, records: usize, skipped: usize },
    /// A newer refresh landed first; this result was dropped.
    Superseded { generation: u64 },
}

struct FeedState {
    issued: u64,
    applied: u64,
    batch: Arc<TransactionBatch>,
}

/// Holds the latest transaction batch. Overlapping refreshes resolve
/// last-write-wins by issue order, so a slow stale fetch never replaces
/// data from a newer one.
pub struct TransactionFeed<S: TransactionSource> {
    source: S,
    state: RwLock<FeedState>,
}

impl<S: TransactionSource> TransactionFeed<S> {
    pub fn new(source: S) -> Self {
        TransactionFeed {
            source,
            state: RwLock::new(FeedState {
                issued: 0,
                applied: 0,
                batch: Arc::new(TransactionBatch::default()),
            }),
        }
    }

    pub async fn refresh(&self) -> Result<RefreshOutcome, SplitviewError> {
        let generation = {
            let mut state = self.state.write().await;
            state.issued += 1;
            state.issued
        };

        // Lock is not held across the fetch so refreshes can overlap.
        let payload = self.source.fetch().await?;
        let batch = decode_transactions(&payload)?.sort_by_recency();

        let mut state = self.state.write().await;
        if generation < state.applied {
            warn!(
                event = REFRESH_SUPERSEDED,
                generation,
                applied = state.applied,
                "Discarding stale refresh result"
            );
            return Ok(RefreshOutcome::Superseded { generation });
        }

        let outcome = RefreshOutcome::Applied {
            generation,
            records: batch.len(),
            skipped: batch.skipped_count(),
        };
        state.applied = generation;
        state.batch = Arc::new(batch);
        info!("Applied refresh {} ({:?})", generation, outcome);
        Ok(outcome)
    }

    pub async fn snapshot(&self) -> Arc<TransactionBatch> {
        self.state.read().await.batch.clone()
    }
}
