//! Implements the `Budget` trait using in-memory data for testing purposes.
//!
//! Note: this is compiled even in the "production" version of this app so that we can run the whole
//! app, top-to-bottom, without calling YNAB.

use crate::api::Budget;
use crate::error::{ErrorType, IntoResult};
use crate::model::{Transaction, TransactionsResponse};
use crate::Result;
use anyhow::Context;

/// An implementation of the `Budget` trait that does not use the network. It returns the
/// transactions it was created with or, by default, the transactions in `SEED_DATA`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TestBudget {
    /// `None` means the seed data is used.
    transactions: Option<Vec<Transaction>>,
}

impl TestBudget {
    /// Create a new `TestBudget` that returns `transactions`.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Some(transactions),
        }
    }
}

#[async_trait::async_trait]
impl Budget for TestBudget {
    async fn transactions(&self) -> Result<Vec<Transaction>> {
        match &self.transactions {
            Some(transactions) => Ok(transactions.clone()),
            None => seed_data(),
        }
    }
}

/// Parses the seed data from this module exactly like a YNAB response body.
fn seed_data() -> Result<Vec<Transaction>> {
    let response: TransactionsResponse = serde_json::from_str(SEED_DATA)
        .context("Unable to parse the test seed data")
        .pub_result(ErrorType::MalformedResponse)?;
    Ok(response.into_transactions())
}

/// Seed transaction data, shaped like a `GET /budgets/{budget_id}/transactions` response.
const SEED_DATA: &str = r##"{
  "data": {
    "transactions": [
      {"id": "tx01", "date": "2025-10-01", "amount": -45880, "memo": "Water bill", "payee_name": "City Water District", "category_name": "Utilities"},
      {"id": "tx02", "date": "2025-10-02", "amount": -9750, "memo": "Lunch with Bob", "payee_name": "In-N-Out Burger", "category_name": "Restaurants"},
      {"id": "tx03", "date": "2025-10-03", "amount": -61450, "memo": null, "payee_name": "Shell", "category_name": "Gas & Fuel"},
      {"id": "tx04", "date": "2025-10-04", "amount": -5950, "memo": "", "payee_name": "Starbucks", "category_name": "Coffee Shops"},
      {"id": "tx05", "date": "2025-10-05", "amount": -118560, "memo": "Costco run, party supplies", "payee_name": "Costco", "category_name": "Groceries"},
      {"id": "tx06", "date": "2025-10-06", "amount": 2500000, "memo": "Paycheck", "payee_name": "Employer", "category_name": "Inflow: Ready to Assign"},
      {"id": "tx07", "date": "2025-10-07", "amount": -42300, "memo": "Dinner with BOB and Alice", "payee_name": "Olive Garden", "category_name": "Restaurants"},
      {"id": "tx08", "date": "2025-10-08", "amount": -150000, "memo": "Transfer to savings", "payee_name": "Transfer : Savings", "category_name": null},
      {"id": "tx09", "date": "2025-10-09", "amount": -8500, "memo": "Coffee SHOP", "payee_name": "Blue Bottle", "category_name": "Coffee Shops"},
      {"id": "tx10", "date": "2025-10-10", "amount": -1234560, "memo": "Rent (October)", "payee_name": "Landlord", "category_name": "Rent"}
    ],
    "server_knowledge": 100
  }
}"##;
