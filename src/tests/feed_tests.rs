use super::wire_record;
use crate::core::decode::TransactionBatch;
use crate::core::errors::SplitviewError;
use crate::infrastructure::feed::{RefreshOutcome, TransactionFeed};
use crate::infrastructure::source::TransactionSource;
use crate::infrastructure::source::in_memory::InMemorySource;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Hands out queued payloads, each after its own delay.
struct DelayedSource {
    responses: Mutex<VecDeque<(Duration, Value)>>,
}

#[async_trait]
impl TransactionSource for DelayedSource {
    async fn fetch(&self) -> Result<Value, SplitviewError> {
        let (delay, payload) = self
            .responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| SplitviewError::SourceError("no response queued".to_string()))?;
        tokio::time::sleep(delay).await;
        Ok(payload)
    }
}

fn names(feed_batch: Arc<TransactionBatch>) -> Vec<String> {
    feed_batch.transactions().iter().map(|tx| tx.name.clone()).collect()
}

#[tokio::test]
async fn test_refresh_applies_sorted_batch() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut older = wire_record(1, "Older", json!(20.0));
    older["date"] = json!("2025-05-01T09:00:00Z");
    let newer = wire_record(2, "Newer", json!(20.0));
    let feed = TransactionFeed::new(InMemorySource::new(json!([older, newer, { "id": 3 }])));

    assert!(feed.snapshot().await.is_empty());
    let outcome = feed.refresh().await.unwrap();
    assert_eq!(
        outcome,
        RefreshOutcome::Applied {
            generation: 1,
            records: 2,
            skipped: 1
        }
    );
    assert_eq!(names(feed.snapshot().await), vec!["Newer", "Older"]);
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_batch() {
    let source = InMemorySource::new(json!([wire_record(1, "Lunch", json!(20.0))]));
    let feed = TransactionFeed::new(source.clone());
    feed.refresh().await.unwrap();

    source.fail_with("network down").await;
    let result = feed.refresh().await;
    assert!(matches!(result, Err(SplitviewError::SourceError(ref msg)) if msg == "network down"));
    assert_eq!(names(feed.snapshot().await), vec!["Lunch"]);

    source.replace(json!({ "error": "Session expired" })).await;
    assert!(matches!(feed.refresh().await, Err(SplitviewError::MalformedPayload(_))));
    assert_eq!(feed.snapshot().await.len(), 1);

    source.replace(json!([])).await;
    assert!(matches!(
        feed.refresh().await.unwrap(),
        RefreshOutcome::Applied { generation: 4, records: 0, .. }
    ));
    assert!(feed.snapshot().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_stale_refresh_is_discarded() {
    let source = DelayedSource {
        responses: Mutex::new(VecDeque::from([
            (Duration::from_millis(500), json!([wire_record(1, "Stale", json!(20.0))])),
            (Duration::from_millis(50), json!([wire_record(2, "Fresh", json!(20.0))])),
        ])),
    };
    let feed = TransactionFeed::new(source);

    let (first, second) = tokio::join!(feed.refresh(), feed.refresh());

    assert_eq!(first.unwrap(), RefreshOutcome::Superseded { generation: 1 });
    assert!(matches!(second.unwrap(), RefreshOutcome::Applied { generation: 2, .. }));
    assert_eq!(names(feed.snapshot().await), vec!["Fresh"]);
}

#[tokio::test(start_paused = true)]
async fn test_in_order_refreshes_both_apply() {
    let source = DelayedSource {
        responses: Mutex::new(VecDeque::from([
            (Duration::from_millis(10), json!([wire_record(1, "First", json!(20.0))])),
            (Duration::from_millis(80), json!([wire_record(2, "Second", json!(20.0))])),
        ])),
    };
    let feed = TransactionFeed::new(source);

    let (first, second) = tokio::join!(feed.refresh(), feed.refresh());

    assert!(matches!(first.unwrap(), RefreshOutcome::Applied { generation: 1, .. }));
    assert!(matches!(second.unwrap(), RefreshOutcome::Applied { generation: 2, .. }));
    assert_eq!(names(feed.snapshot().await), vec!["Second"]);
}
