mod expense_tests;
mod feed_tests;

use crate::constants::NO_SPLIT_PLACEHOLDER;
use crate::core::models::{Category, Counterparty, PaymentStatus, SplitMode, Transaction, TransactionId};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

pub fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn person(username: &str, full_name: &str) -> Counterparty {
    Counterparty {
        username: username.to_string(),
        full_name: full_name.to_string(),
    }
}

/// Builds a transaction with shares consistent with its split mode.
/// `id` doubles as "days ago", so lower ids are more recent.
pub fn expense(id: i64, name: &str, amount: &str, status: PaymentStatus, split_mode: SplitMode) -> Transaction {
    let amount = dec(amount);
    let (user_share, other_user_share) = match split_mode {
        SplitMode::User1PaidNoSplit => (amount, Decimal::ZERO),
        SplitMode::User2PaidNoSplit => (Decimal::ZERO, amount),
        _ => (amount / Decimal::TWO, amount / Decimal::TWO),
    };
    let split_with = if split_mode == SplitMode::User1PaidNoSplit {
        person("nosplit", NO_SPLIT_PLACEHOLDER)
    } else {
        person("alice", "Alice Sharma")
    };
    Transaction {
        id: TransactionId::Int(id),
        name: name.to_string(),
        amount,
        category: Category::Other,
        date: base_date() - Duration::days(id - 1),
        split_mode,
        split_with,
        user_share,
        other_user_share,
        settled: false,
        status,
    }
}

/// Six transactions, already ordered most recent first.
///
/// you_paid: 85.50, 120.40, 40.00, 150.00 (sum 395.90)
/// they_paid: 65.80 (no split, open), 28.60 (equal split, settled)
pub fn sample_transactions() -> Vec<Transaction> {
    let bob = person("bob", "Bob Mehta");
    let carol = person("carol", "Carol Dsouza");

    vec![
        Transaction {
            category: Category::Food,
            ..expense(1, "Pizza night", "85.50", PaymentStatus::YouPaid, SplitMode::User1PaidSplitEqual)
        },
        Transaction {
            category: Category::Utilities,
            split_with: bob.clone(),
            ..expense(2, "Electricity bill", "120.40", PaymentStatus::YouPaid, SplitMode::User1PaidSplitEqual)
        },
        Transaction {
            category: Category::Entertainment,
            ..expense(3, "Movie tickets", "40.00", PaymentStatus::YouPaid, SplitMode::User1PaidNoSplit)
        },
        Transaction {
            category: Category::Transportation,
            ..expense(4, "Taxi to airport", "65.80", PaymentStatus::TheyPaid, SplitMode::User2PaidNoSplit)
        },
        Transaction {
            category: Category::Groceries,
            split_with: bob,
            settled: true,
            ..expense(5, "Groceries run", "28.60", PaymentStatus::TheyPaid, SplitMode::User2PaidSplitEqual)
        },
        Transaction {
            category: Category::Travel,
            split_with: carol,
            ..expense(6, "Weekend trip", "150.00", PaymentStatus::YouPaid, SplitMode::User1PaidSplitEqual)
        },
    ]
}

/// A transaction as the backend serialises it.
pub fn wire_record(id: i64, name: &str, amount: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "amount": amount,
        "category": "food",
        "date": "2025-06-01T18:30:00Z",
        "splitMode": "user1_paid_split_equal",
        "splitWith": { "username": "alice", "fullName": "Alice Sharma" },
        "userShare": 10.0,
        "otherUserShare": 10.0,
        "settled": false,
        "status": "you_paid"
    })
}

pub fn ids(transactions: &[&Transaction]) -> Vec<TransactionId> {
    transactions.iter().map(|tx| tx.id.clone()).collect()
}
