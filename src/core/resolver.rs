use crate::constants::{SHARE_MISMATCH, SHARE_TOLERANCE, SPLIT_MODE_FALLBACK};
use crate::core::errors::SplitviewError;
use crate::core::models::{PaymentStatus, SplitMode, Transaction};
use crate::core::presentation::format_amount;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

/// Color class a settlement label is rendered with.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Debt,
    Credit,
    Neutral,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Diagnostic {
    /// Split mode was not recognised and equal-split rules were applied.
    UnknownSplitMode(String),
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Resolution {
    pub label: String,
    pub tone: Tone,
    pub settled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
}

/// Derives the settlement status line for a transaction.
///
/// `split_mode` is authoritative for the no-split branches. A share that
/// happens to equal the full amount is never taken to mean "no split".
pub struct SplitResolver;

impl SplitResolver {
    pub fn resolve(tx: &Transaction) -> Resolution {
        if tx.settled {
            return Resolution {
                label: "Settled".to_string(),
                tone: Tone::Neutral,
                settled: true,
                diagnostic: None,
            };
        }

        let diagnostic = match &tx.split_mode {
            SplitMode::Unknown(raw) => {
                warn!(
                    event = SPLIT_MODE_FALLBACK,
                    transaction_id = %tx.id,
                    split_mode = %raw,
                    "Unknown split mode, resolving as equal split"
                );
                Some(Diagnostic::UnknownSplitMode(raw.clone()))
            }
            _ => None,
        };

        let (label, tone) = match tx.status {
            PaymentStatus::YouPaid => match tx.split_mode {
                SplitMode::User1PaidNoSplit => ("You paid (no split)".to_string(), Tone::Neutral),
                _ => (
                    format!("{} owes you {}", tx.counterparty_name(), format_amount(tx.other_user_share)),
                    Tone::Credit,
                ),
            },
            PaymentStatus::TheyPaid => match tx.split_mode {
                // Counterparty covered everything, so the whole amount is owed back.
                SplitMode::User2PaidNoSplit => (format!("You owe {}", format_amount(tx.amount)), Tone::Debt),
                _ => (format!("You owe {}", format_amount(tx.user_share)), Tone::Debt),
            },
        };

        Resolution {
            label,
            tone,
            settled: false,
            diagnostic,
        }
    }

    /// Checks the backend-supplied shares against the split invariant.
    pub fn verify_shares(tx: &Transaction) -> Result<(), SplitviewError> {
        let mismatch = |detail: String| {
            debug!(event = SHARE_MISMATCH, transaction_id = %tx.id, %detail, "Share invariant violated");
            Err(SplitviewError::ShareMismatch {
                id: tx.id.to_string(),
                detail,
            })
        };

        match tx.split_mode {
            SplitMode::User1PaidSplitEqual | SplitMode::User2PaidSplitEqual => {
                let Some(sum) = tx.user_share.checked_add(tx.other_user_share) else {
                    return mismatch(format!(
                        "shares {} and {} overflow",
                        tx.user_share, tx.other_user_share
                    ));
                };
                if !within_tolerance(sum, tx.amount) {
                    return mismatch(format!("shares sum to {} but amount is {}", sum, tx.amount));
                }
                let half = tx.amount / Decimal::TWO;
                if !within_tolerance(tx.other_user_share, half) {
                    return mismatch(format!(
                        "equal split expects {} per party, got {}",
                        half.round_dp(2),
                        tx.other_user_share
                    ));
                }
                Ok(())
            }
            SplitMode::User1PaidNoSplit => Self::verify_unsplit_share(tx, tx.other_user_share, mismatch),
            SplitMode::User2PaidNoSplit => Self::verify_unsplit_share(tx, tx.user_share, mismatch),
            SplitMode::Unknown(_) => Ok(()),
        }
    }

    // The non-payer carries either nothing or everything under a no-split mode.
    fn verify_unsplit_share<F>(tx: &Transaction, share: Decimal, mismatch: F) -> Result<(), SplitviewError>
    where
        F: Fn(String) -> Result<(), SplitviewError>,
    {
        if share.is_zero() || within_tolerance(share, tx.amount) {
            Ok(())
        } else {
            mismatch(format!(
                "no-split share must be 0 or {}, got {}",
                tx.amount, share
            ))
        }
    }
}

fn within_tolerance(a: Decimal, b: Decimal) -> bool {
    a.checked_sub(b).is_some_and(|diff| diff.abs() <= SHARE_TOLERANCE)
}
