//! Configuration for talking to YNAB.
//!
//! The credentials are read once at startup, from the environment, a `.env` file or the command
//! line, and are then held immutably in a `Config` that is passed by reference to whatever needs
//! it.

use crate::error::{ErrorType, IntoResult, Res};
use crate::Result;
use anyhow::{bail, Context};
use std::fmt::{Debug, Formatter};
use url::Url;

/// The default base URL of the YNAB API.
pub const DEFAULT_API_URL: &str = "https://api.youneedabudget.com/v1";

/// The environment variable that holds the YNAB personal access token.
pub const ACCESS_TOKEN_ENV: &str = "YNAB_ACCESS_TOKEN";

/// The environment variable that holds the YNAB budget ID.
pub const BUDGET_ID_ENV: &str = "YNAB_BUDGET_ID";

/// The environment variable that overrides the YNAB API base URL.
pub const API_URL_ENV: &str = "YNAB_API_URL";

/// The `Config` object holds the credentials and the location of the YNAB API.
#[derive(Clone, Eq, PartialEq)]
pub struct Config {
    access_token: String,
    budget_id: String,
    api_url: Url,
}

impl Config {
    /// Validates the credentials and creates a `Config`.
    ///
    /// # Arguments
    /// - `access_token` - The YNAB personal access token, sent as a bearer token
    /// - `budget_id` - The ID of the budget to read transactions from
    /// - `api_url` - The base URL of the API, e.g. `https://api.youneedabudget.com/v1`
    ///
    /// # Errors
    /// Returns an `ErrorType::Config` error if either credential is missing or blank, or if the
    /// API URL cannot be parsed.
    pub fn new(
        access_token: Option<String>,
        budget_id: Option<String>,
        api_url: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new_inner(access_token, budget_id, api_url.as_ref()).pub_result(ErrorType::Config)
    }

    fn new_inner(
        access_token: Option<String>,
        budget_id: Option<String>,
        api_url: &str,
    ) -> Res<Self> {
        let access_token = required(access_token, ACCESS_TOKEN_ENV, "access token")?;
        let budget_id = required(budget_id, BUDGET_ID_ENV, "budget ID")?;
        let api_url = parse_api_url(api_url)?;
        Ok(Self {
            access_token,
            budget_id,
            api_url,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn budget_id(&self) -> &str {
        &self.budget_id
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// The URL of the transactions endpoint for the configured budget.
    pub(crate) fn transactions_url(&self) -> Res<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("The API URL '{}' cannot be a base", self.api_url))?
            .pop_if_empty()
            .extend(["budgets", self.budget_id.as_str(), "transactions"]);
        Ok(url)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"<redacted>")
            .field("budget_id", &self.budget_id)
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

fn required(value: Option<String>, env: &str, name: &str) -> Res<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        Some(_) => bail!("The YNAB {name} is blank, set {env} or pass it on the command line"),
        None => bail!("The YNAB {name} is missing, set {env} or pass it on the command line"),
    }
}

fn parse_api_url(s: &str) -> Res<Url> {
    let url = Url::parse(s).with_context(|| format!("Invalid YNAB API URL '{s}'"))?;
    if url.cannot_be_a_base() {
        bail!("The YNAB API URL '{s}' cannot be used as a base URL");
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_config_new() {
        let config = Config::new(some("tok"), some("budget-1"), DEFAULT_API_URL).unwrap();
        assert_eq!(config.access_token(), "tok");
        assert_eq!(config.budget_id(), "budget-1");
        assert_eq!(
            config.transactions_url().unwrap().as_str(),
            "https://api.youneedabudget.com/v1/budgets/budget-1/transactions"
        );
    }

    #[test]
    fn test_transactions_url_trailing_slash() {
        let config = Config::new(some("tok"), some("b"), "http://127.0.0.1:9999/v1/").unwrap();
        assert_eq!(
            config.transactions_url().unwrap().as_str(),
            "http://127.0.0.1:9999/v1/budgets/b/transactions"
        );
    }

    #[test]
    fn test_budget_id_is_escaped() {
        let config = Config::new(some("tok"), some("a/b c"), DEFAULT_API_URL).unwrap();
        assert_eq!(
            config.transactions_url().unwrap().as_str(),
            "https://api.youneedabudget.com/v1/budgets/a%2Fb%20c/transactions"
        );
    }

    #[test]
    fn test_missing_access_token() {
        let err = Config::new(None, some("b"), DEFAULT_API_URL).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Config);
        assert!(err.to_string().contains(ACCESS_TOKEN_ENV));
    }

    #[test]
    fn test_blank_budget_id() {
        let err = Config::new(some("tok"), some("  "), DEFAULT_API_URL).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Config);
        assert!(err.to_string().contains(BUDGET_ID_ENV));
    }

    #[test]
    fn test_bad_api_url() {
        let err = Config::new(some("tok"), some("b"), "not a url").unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Config);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::new(some("secret-token"), some("b"), DEFAULT_API_URL).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
