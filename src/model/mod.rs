//! Types that represent the core data model, such as `Transaction` and `Amount`.
mod amount;
mod filter;
mod transaction;

pub use amount::{format_amount, Amount};
pub use filter::MemoFilter;
pub use transaction::Transaction;
pub(crate) use transaction::TransactionsResponse;
