use crate::constants::{MAX_AMOUNT, RECORD_SKIPPED};
use crate::core::errors::SplitviewError;
use crate::core::models::Transaction;
use crate::core::resolver::SplitResolver;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// A record from the fetched payload that was left out of the batch.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

/// Transactions decoded from one fetch, plus what could not be used.
#[derive(Clone, Debug, Default)]
pub struct TransactionBatch {
    transactions: Vec<Transaction>,
    skipped: Vec<SkippedRecord>,
    share_warnings: usize,
}

impl TransactionBatch {
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Records kept despite shares that break the split invariant.
    pub fn share_warnings(&self) -> usize {
        self.share_warnings
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Most recent first. Stable, so equal dates keep payload order.
    pub fn sort_by_recency(mut self) -> Self {
        self.transactions.sort_by(|a, b| b.date.cmp(&a.date));
        self
    }
}

/// Decodes the backend's transaction list one element at a time.
///
/// Only a payload that is not a JSON array is an error. Elements that fail
/// to decode, have a blank name, a non-positive amount or an amount or
/// share beyond `MAX_AMOUNT` are skipped.
pub fn decode_transactions(payload: &Value) -> Result<TransactionBatch, SplitviewError> {
    let items = payload.as_array().ok_or_else(|| {
        SplitviewError::MalformedPayload(format!("expected a transaction array, got {}", json_kind(payload)))
    })?;

    let mut batch = TransactionBatch::default();
    for (index, item) in items.iter().enumerate() {
        match decode_one(item) {
            Ok(tx) => {
                if SplitResolver::verify_shares(&tx).is_err() {
                    batch.share_warnings += 1;
                }
                batch.transactions.push(tx);
            }
            Err(reason) => {
                warn!(event = RECORD_SKIPPED, index, %reason, "Skipping malformed transaction");
                batch.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    debug!(
        "Decoded {} transactions, skipped {}, {} with share warnings",
        batch.transactions.len(),
        batch.skipped.len(),
        batch.share_warnings
    );
    Ok(batch)
}

fn decode_one(item: &Value) -> Result<Transaction, String> {
    let tx = Transaction::deserialize(item).map_err(|e| e.to_string())?;
    if tx.name.trim().is_empty() {
        return Err(format!("transaction {} has an empty name", tx.id));
    }
    if tx.amount <= Decimal::ZERO {
        return Err(format!("transaction {} has non-positive amount {}", tx.id, tx.amount));
    }
    for (field, value) in [
        ("amount", tx.amount),
        ("userShare", tx.user_share),
        ("otherUserShare", tx.other_user_share),
    ] {
        if value.abs() > MAX_AMOUNT {
            return Err(format!("transaction {} has out-of-range {} {}", tx.id, field, value));
        }
    }
    Ok(tx)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
