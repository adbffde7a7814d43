//! Display mapping for transactions and balances.
//!
//! Everything here is a pure function of its inputs. Date formatting takes
//! the current time from a [`Clock`] so callers and tests control "now".

use crate::constants::DISPLAY_DECIMALS;
use crate::core::models::{Category, SplitMode};
use crate::core::resolver::Tone;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Rounds half away from zero to two places and always prints both decimals.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

pub fn format_money(amount: Decimal, symbol: &str) -> String {
    format!("{}{}", symbol, format_amount(amount))
}

pub fn category_icon(category: &Category) -> &'static str {
    match category {
        Category::Housing => "🏠",
        Category::Food => "🍕",
        Category::Transportation => "🚗",
        Category::Groceries => "🛒",
        Category::Utilities => "⚡",
        Category::Clothing => "👕",
        Category::Healthcare => "💊",
        Category::Entertainment => "🎬",
        Category::Fitness => "🏋️",
        Category::Travel => "✈️",
        Category::Education => "📚",
        Category::Gifts => "🎁",
        Category::PersonalCare => "💳",
        Category::Maintenance => "🔧",
        Category::Subscriptions => "📱",
        Category::Business => "💼",
        Category::Other | Category::Unknown(_) => "📊",
    }
}

pub fn category_label(category: &Category) -> &'static str {
    match category {
        Category::Housing => "Housing & Rent",
        Category::Food => "Food & Dining",
        Category::Transportation => "Transportation",
        Category::Groceries => "Groceries",
        Category::Utilities => "Utilities",
        Category::Clothing => "Clothing",
        Category::Healthcare => "Healthcare",
        Category::Entertainment => "Entertainment",
        Category::Fitness => "Fitness & Sports",
        Category::Travel => "Travel",
        Category::Education => "Education",
        Category::Gifts => "Gifts & Donations",
        Category::PersonalCare => "Personal Care",
        Category::Maintenance => "Home Maintenance",
        Category::Subscriptions => "Subscriptions",
        Category::Business => "Business",
        Category::Other | Category::Unknown(_) => "Other",
    }
}

pub fn split_mode_label(mode: &SplitMode) -> &'static str {
    match mode {
        SplitMode::User1PaidSplitEqual => "I paid, split equally",
        SplitMode::User2PaidSplitEqual => "They paid, split equally",
        SplitMode::User1PaidNoSplit => "I paid, no split",
        SplitMode::User2PaidNoSplit => "They paid, no split",
        SplitMode::Unknown(_) => "Unknown split",
    }
}

/// Positive balances are owed to the viewer.
pub fn balance_tone(balance: Decimal) -> Tone {
    if balance > Decimal::ZERO {
        Tone::Credit
    } else if balance < Decimal::ZERO {
        Tone::Debt
    } else {
        Tone::Neutral
    }
}

pub fn balance_text(balance: Decimal, symbol: &str) -> String {
    match balance_tone(balance) {
        Tone::Credit => format!("owes you {}", format_money(balance.abs(), symbol)),
        Tone::Debt => format!("you owe {}", format_money(balance.abs(), symbol)),
        Tone::Neutral => "all settled".to_string(),
    }
}

pub fn total_balance_text(total: Decimal, symbol: &str) -> String {
    match balance_tone(total) {
        Tone::Credit => format!("You are owed {}", format_money(total, symbol)),
        Tone::Debt => format!("You owe {}", format_money(total.abs(), symbol)),
        Tone::Neutral => "All expenses settled".to_string(),
    }
}

/// Calendar-day distance from `clock`'s today, in either direction.
pub fn relative_date(date: DateTime<Utc>, clock: &dyn Clock) -> String {
    let days = (clock.now().date_naive() - date.date_naive()).num_days().abs();
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}
