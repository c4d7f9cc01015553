//! Implements the `Budget` trait by calling the YNAB HTTP API with `reqwest`.

use crate::api::Budget;
use crate::error::{ErrorType, HttpStatus, IntoResult, Res};
use crate::model::{Transaction, TransactionsResponse};
use crate::{Config, Result};
use anyhow::Context;
use reqwest::StatusCode;
use tracing::{debug, trace};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches transactions from `GET {api_url}/budgets/{budget_id}/transactions` using the access
/// token as a bearer credential. Each call makes exactly one request; nothing is retried or cached.
pub struct YnabClient {
    client: reqwest::Client,
    url: Url,
    access_token: String,
}

impl YnabClient {
    pub fn new(config: &Config) -> Result<Self> {
        let url = config.transactions_url().pub_result(ErrorType::Config)?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Unable to create the HTTP client")
            .pub_result(ErrorType::Request)?;
        Ok(Self {
            client,
            url,
            access_token: config.access_token().to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Budget for YnabClient {
    async fn transactions(&self) -> Result<Vec<Transaction>> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .bearer_auth(&self.access_token)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.url))
            .pub_result(ErrorType::Request)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read the YNAB response body")
            .pub_result(ErrorType::Request)?;
        trace!("Response status {status}, {} bytes", body.len());

        if status != StatusCode::OK {
            return Err(HttpStatus::new(status.as_u16(), body))
                .context("YNAB did not return the transactions")
                .pub_result(ErrorType::Http);
        }

        let transactions = parse_transactions(&body).pub_result(ErrorType::MalformedResponse)?;
        debug!("Received {} transactions", transactions.len());
        Ok(transactions)
    }
}

/// Parses a transactions response body and returns `data.transactions`.
fn parse_transactions(body: &str) -> Res<Vec<Transaction>> {
    let response: TransactionsResponse = serde_json::from_str(body)
        .context("The YNAB response did not contain the expected data.transactions list")?;
    Ok(response.into_transactions())
}
