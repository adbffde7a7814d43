use super::category::Category;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend ids come through as either numbers or strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TransactionId {
    Int(i64),
    Text(String),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Int(id) => write!(f, "{}", id),
            TransactionId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Who fronted the money. "user1" is always the viewer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum SplitMode {
    User1PaidSplitEqual,
    User2PaidSplitEqual,
    User1PaidNoSplit,
    User2PaidNoSplit,
    Unknown(String),
}

impl SplitMode {
    pub fn as_str(&self) -> &str {
        match self {
            SplitMode::User1PaidSplitEqual => "user1_paid_split_equal",
            SplitMode::User2PaidSplitEqual => "user2_paid_split_equal",
            SplitMode::User1PaidNoSplit => "user1_paid_no_split",
            SplitMode::User2PaidNoSplit => "user2_paid_no_split",
            SplitMode::Unknown(raw) => raw,
        }
    }

    pub fn is_no_split(&self) -> bool {
        matches!(self, SplitMode::User1PaidNoSplit | SplitMode::User2PaidNoSplit)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SplitMode::Unknown(_))
    }

    /// Whether creating an expense in this mode needs a counterparty username.
    pub fn requires_counterparty(&self) -> bool {
        matches!(
            self,
            SplitMode::User1PaidSplitEqual | SplitMode::User2PaidSplitEqual | SplitMode::User2PaidNoSplit
        )
    }
}

impl From<String> for SplitMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "user1_paid_split_equal" => SplitMode::User1PaidSplitEqual,
            "user2_paid_split_equal" => SplitMode::User2PaidSplitEqual,
            "user1_paid_no_split" => SplitMode::User1PaidNoSplit,
            "user2_paid_no_split" => SplitMode::User2PaidNoSplit,
            _ => SplitMode::Unknown(raw),
        }
    }
}

impl From<&str> for SplitMode {
    fn from(raw: &str) -> Self {
        SplitMode::from(raw.to_string())
    }
}

impl From<SplitMode> for String {
    fn from(mode: SplitMode) -> Self {
        match mode {
            SplitMode::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    YouPaid,
    TheyPaid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::YouPaid => "you_paid",
            PaymentStatus::TheyPaid => "they_paid",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Counterparty {
    pub username: String,
    pub full_name: String,
}

impl Counterparty {
    /// Backend fills `splitWith` with a placeholder user for no-split expenses.
    pub fn is_placeholder(&self) -> bool {
        self.full_name == crate::constants::NO_SPLIT_PLACEHOLDER
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub name: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub split_mode: SplitMode,
    pub split_with: Counterparty,
    pub user_share: Decimal,
    pub other_user_share: Decimal,
    #[serde(default)]
    pub settled: bool,
    pub status: PaymentStatus,
}

impl Transaction {
    pub fn counterparty_name(&self) -> &str {
        &self.split_with.full_name
    }

    pub fn is_outstanding_debt(&self) -> bool {
        self.status == PaymentStatus::TheyPaid && !self.settled
    }
}
