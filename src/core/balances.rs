use crate::core::models::{DashboardSnapshot, PaymentStatus, SplitMode, Transaction, UserBalance, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CounterpartyBalance {
    pub username: String,
    pub full_name: String,
    /// Positive: they owe the viewer. Negative: the viewer owes them.
    pub balance: Decimal,
    pub last_activity: DateTime<Utc>,
}

/// Net position of the viewer against everyone they split with.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct BalanceSheet {
    pub counterparties: Vec<CounterpartyBalance>,
    pub total_to_give: Decimal,
    pub total_to_receive: Decimal,
    pub total_balance: Decimal,
}

impl BalanceSheet {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut by_user: HashMap<&str, CounterpartyBalance> = HashMap::new();

        for tx in transactions {
            // Viewer covered it alone, nobody else is involved.
            if tx.status == PaymentStatus::YouPaid && tx.split_mode == SplitMode::User1PaidNoSplit {
                continue;
            }

            let entry = by_user
                .entry(tx.split_with.username.as_str())
                .or_insert_with(|| CounterpartyBalance {
                    username: tx.split_with.username.clone(),
                    full_name: tx.split_with.full_name.clone(),
                    balance: Decimal::ZERO,
                    last_activity: tx.date,
                });
            if tx.date > entry.last_activity {
                entry.last_activity = tx.date;
            }
            entry.balance = entry.balance.saturating_add(Self::contribution(tx));
        }

        let mut counterparties: Vec<CounterpartyBalance> = by_user.into_values().collect();
        counterparties.sort_by(|a, b| {
            b.last_activity
                .cmp(&a.last_activity)
                .then_with(|| a.username.cmp(&b.username))
        });

        let total_to_receive: Decimal = counterparties
            .iter()
            .map(|c| c.balance)
            .filter(|b| *b > Decimal::ZERO)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let total_to_give: Decimal = counterparties
            .iter()
            .map(|c| c.balance)
            .filter(|b| *b < Decimal::ZERO)
            .map(|b| b.abs())
            .fold(Decimal::ZERO, Decimal::saturating_add);

        BalanceSheet {
            counterparties,
            total_to_give,
            total_to_receive,
            total_balance: total_to_receive.saturating_sub(total_to_give),
        }
    }

    /// Signed amount one transaction moves the viewer's balance by.
    fn contribution(tx: &Transaction) -> Decimal {
        if tx.settled {
            return Decimal::ZERO;
        }
        match (tx.status, &tx.split_mode) {
            (PaymentStatus::YouPaid, SplitMode::User1PaidNoSplit) => Decimal::ZERO,
            (PaymentStatus::YouPaid, _) => tx.other_user_share,
            (PaymentStatus::TheyPaid, SplitMode::User2PaidNoSplit) => -tx.amount,
            (PaymentStatus::TheyPaid, _) => -tx.user_share,
        }
    }

    pub fn active_count(&self) -> usize {
        self.counterparties.iter().filter(|c| !c.balance.is_zero()).count()
    }

    pub fn to_snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            total_balance: self.total_balance,
            total_to_give: self.total_to_give,
            total_to_receive: self.total_to_receive,
            user_balances: self
                .counterparties
                .iter()
                .map(|c| UserBalance {
                    id: UserId::Text(c.username.clone()),
                    full_name: c.full_name.clone(),
                    username: c.username.clone(),
                    balance: c.balance,
                    last_transaction: Some(c.last_activity.to_rfc3339()),
                })
                .collect(),
        }
    }
}

/// Profile screen counters.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ActivityStats {
    pub total_expenses: Decimal,
    pub total_friends: usize,
    pub settled_expenses: usize,
}

impl ActivityStats {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let friends: HashSet<&str> = transactions
            .iter()
            .filter(|tx| !tx.split_with.is_placeholder())
            .map(|tx| tx.split_with.username.as_str())
            .collect();

        ActivityStats {
            total_expenses: transactions
                .iter()
                .fold(Decimal::ZERO, |total, tx| total.saturating_add(tx.amount)),
            total_friends: friends.len(),
            settled_expenses: transactions.iter().filter(|tx| tx.settled).count(),
        }
    }
}
