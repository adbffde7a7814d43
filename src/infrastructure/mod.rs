pub mod feed;
pub mod source;

pub use feed::{RefreshOutcome, TransactionFeed};
pub use source::TransactionSource;
