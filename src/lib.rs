pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::balances::{ActivityStats, BalanceSheet};
pub use crate::core::decode::{TransactionBatch, decode_transactions};
pub use crate::core::errors::SplitviewError;
pub use crate::core::filter::{StatusFilter, TransactionFilterEngine, ViewState};
pub use crate::core::resolver::{Resolution, SplitResolver, Tone};
pub use crate::infrastructure::{RefreshOutcome, TransactionFeed, TransactionSource};

#[cfg(test)]
mod tests;
