use crate::core::decode::TransactionBatch;
use crate::core::errors::SplitviewError;
use crate::core::models::{PaymentStatus, Transaction};
use crate::core::presentation::format_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transactions-screen tab.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    /// Viewer fronted the money.
    Paid,
    /// Counterparty fronted the money and it is not settled yet.
    Owe,
}

impl StatusFilter {
    pub fn matches(self, tx: &Transaction) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Paid => tx.status == PaymentStatus::YouPaid,
            StatusFilter::Owe => tx.is_outstanding_debt(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = SplitviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "paid" => Ok(StatusFilter::Paid),
            "owe" => Ok(StatusFilter::Owe),
            other => Err(SplitviewError::UnknownStatusFilter(other.to_string())),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusFilter::All => "all",
            StatusFilter::Paid => "paid",
            StatusFilter::Owe => "owe",
        };
        write!(f, "{}", s)
    }
}

/// What the user has selected on the transactions screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub status_filter: StatusFilter,
    pub query: String,
}

impl ViewState {
    pub fn with_filter(self, status_filter: StatusFilter) -> Self {
        ViewState { status_filter, ..self }
    }

    pub fn with_query(self, query: impl Into<String>) -> Self {
        ViewState {
            query: query.into(),
            ..self
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    /// Exact sum; round only when displaying.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Summary {
    pub fn display_total(&self) -> String {
        format_amount(self.total)
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct TabCounts {
    pub all: usize,
    pub paid: usize,
    pub owe: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct TransactionView<'a> {
    pub visible: Vec<&'a Transaction>,
    pub summary: Summary,
    pub tab_counts: TabCounts,
    pub skipped: usize,
}

/// Status tab plus free-text search over an already-ordered list.
///
/// Input order is preserved; nothing is re-sorted here.
pub struct TransactionFilterEngine;

impl TransactionFilterEngine {
    pub fn filter<'a>(all: &'a [Transaction], status_filter: StatusFilter, query: &str) -> Vec<&'a Transaction> {
        let needle = query.trim().to_lowercase();
        all.iter()
            .filter(|tx| status_filter.matches(tx))
            .filter(|tx| needle.is_empty() || Self::matches_query(tx, &needle))
            .collect()
    }

    pub fn summarize(filtered: &[&Transaction]) -> Summary {
        Summary {
            count: filtered.len(),
            total: filtered
                .iter()
                .fold(Decimal::ZERO, |total, tx| total.saturating_add(tx.amount)),
        }
    }

    pub fn tab_counts(all: &[Transaction]) -> TabCounts {
        all.iter().fold(TabCounts::default(), |mut counts, tx| {
            counts.all += 1;
            if StatusFilter::Paid.matches(tx) {
                counts.paid += 1;
            }
            if StatusFilter::Owe.matches(tx) {
                counts.owe += 1;
            }
            counts
        })
    }

    pub fn view<'a>(batch: &'a TransactionBatch, state: &ViewState) -> TransactionView<'a> {
        let visible = Self::filter(batch.transactions(), state.status_filter, &state.query);
        let summary = Self::summarize(&visible);
        TransactionView {
            visible,
            summary,
            tab_counts: Self::tab_counts(batch.transactions()),
            skipped: batch.skipped_count(),
        }
    }

    // `needle` is already trimmed and lower-cased.
    fn matches_query(tx: &Transaction, needle: &str) -> bool {
        tx.name.to_lowercase().contains(needle)
            || tx.split_with.full_name.to_lowercase().contains(needle)
            || tx.category.as_str().to_lowercase().contains(needle)
    }
}
