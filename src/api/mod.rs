//! Access to the transactions of a YNAB budget.
//!
//! The `Budget` trait is the seam between the report pipeline and the network. `YnabClient`
//! implements it over HTTP and `TestBudget` implements it with in-memory data.

mod test_budget;
mod ynab;

use crate::model::Transaction;
use crate::{Config, Result};

pub use test_budget::TestBudget;
pub use ynab::YnabClient;

/// When this environment variable is set and non-empty the program uses `TestBudget` instead of
/// calling YNAB.
pub const TEST_MODE_ENV: &str = "YNAB_MEMO_IN_TEST_MODE";

/// A source of transactions for a single budget.
#[async_trait::async_trait]
pub trait Budget {
    /// Fetches every transaction of the budget in the order the source returns them.
    async fn transactions(&self) -> Result<Vec<Transaction>>;
}

/// Whether to talk to YNAB or to use in-memory seed data.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Ynab,
    Test,
}

impl Mode {
    /// Returns `Mode::Test` when `YNAB_MEMO_IN_TEST_MODE` is set and non-empty.
    pub fn from_env() -> Self {
        match std::env::var(TEST_MODE_ENV) {
            Ok(s) if !s.is_empty() => Mode::Test,
            _ => Mode::Ynab,
        }
    }
}

/// Creates the `Budget` implementation for `mode`.
pub fn budget(config: &Config, mode: Mode) -> Result<Box<dyn Budget + Send + Sync>> {
    Ok(match mode {
        Mode::Ynab => Box::new(YnabClient::new(config)?),
        Mode::Test => Box::new(TestBudget::default()),
    })
}
