use super::transaction::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// User ids share the number-or-string wire form of transaction ids.
pub type UserId = TransactionId;

/// One row of the dashboard's "balances with friends" list.
/// Positive `balance` means they owe the viewer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserBalance {
    pub id: UserId,
    pub full_name: String,
    pub username: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(default)]
    pub last_transaction: Option<String>,
}

/// Dashboard payload as served by the backend's `/dashboard` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_to_give: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_to_receive: Decimal,
    #[serde(default)]
    pub user_balances: Vec<UserBalance>,
}
