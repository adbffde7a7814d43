pub mod balance;
pub mod category;
pub mod expense;
pub mod transaction;

pub use balance::{DashboardSnapshot, UserBalance, UserId};
pub use category::Category;
pub use expense::{ExpenseDraft, NewExpense};
pub use transaction::{Counterparty, PaymentStatus, SplitMode, Transaction, TransactionId};
