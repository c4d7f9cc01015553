use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// Represents a single transaction as returned by the YNAB transactions endpoint.
///
/// Only the fields needed for the memo report are kept, everything else in the response object is
/// ignored. `date` and `amount` are required, while `category_name` and `memo` may be `null` or
/// missing entirely.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    /// The transaction date as sent by YNAB, e.g. `2024-01-01`.
    date: String,
    /// The signed transaction amount in milliunits.
    amount: i64,
    #[serde(default)]
    category_name: Option<String>,
    #[serde(default)]
    memo: Option<String>,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        amount: i64,
        category_name: Option<&str>,
        memo: Option<&str>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            category_name: category_name.map(String::from),
            memo: memo.map(String::from),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn amount(&self) -> Amount {
        Amount::from_milliunits(self.amount)
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category_name.as_deref()
    }

    pub fn memo(&self) -> Option<&str> {
        self.memo.as_deref()
    }
}

/// The body of a `GET /budgets/{budget_id}/transactions` response.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub(crate) struct TransactionsResponse {
    pub(crate) data: TransactionsData,
}

#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub(crate) struct TransactionsData {
    pub(crate) transactions: Vec<Transaction>,
}

impl TransactionsResponse {
    pub(crate) fn into_transactions(self) -> Vec<Transaction> {
        self.data.transactions
    }
}
