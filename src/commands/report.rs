//! The memo report command: fetch, filter, assemble.

use crate::api::{self, Budget, Mode};
use crate::args::Args;
use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::model::MemoFilter;
use crate::report::{Columns, Report};
use crate::{utils, Config, Result};
use tracing::debug;

const PROMPT: &str = "Enter a memo filter: ";

/// Runs the whole program for `args`: validates the configuration, asks for the memo filter if it
/// was not given, fetches and filters the transactions, and prints the report.
///
/// The configuration is checked first, so a missing credential is reported before the user is
/// prompted and before any request is made.
pub async fn run(args: &Args, mode: Mode) -> Result<()> {
    let common = args.common();
    let config = Config::new(
        common.access_token().map(String::from),
        common.budget_id().map(String::from),
        common.api_url(),
    )?;
    debug!("{config:?}");
    let budget = api::budget(&config, mode)?;

    let filter = memo_filter(args.memo())?;
    report(budget.as_ref(), &filter, args.columns())
        .await?
        .print(args.format())
}

/// Returns a `MemoFilter` for `text`, or asks for the filter on stdin when `text` is `None`.
pub fn memo_filter(text: Option<&str>) -> Result<MemoFilter> {
    let text = match text {
        Some(s) => s.to_string(),
        None => utils::prompt(std::io::stdin().lock(), std::io::stdout(), PROMPT)
            .pub_result(ErrorType::Output)?,
    };
    debug!("Memo filter is '{text}'");
    Ok(MemoFilter::new(text))
}

/// Fetches the budget's transactions once and builds a report of those whose memo matches
/// `filter`. If fetching fails the error is returned and no report is produced.
pub async fn report(
    budget: &(dyn Budget + Send + Sync),
    filter: &MemoFilter,
    columns: Columns,
) -> Result<Out<Report>> {
    let transactions = budget.transactions().await?;
    let report = Report::new(filter.apply(&transactions), columns);
    let message = format!(
        "{} of {} transactions matched the memo filter",
        report.rows().len(),
        transactions.len()
    );
    Ok(Out::new(message, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{TestBudget, YnabClient};
    use crate::args::Common;
    use crate::model::Transaction;
    use crate::report::OutputFormat;
    use crate::test::TestServer;
    use tracing_subscriber::filter::LevelFilter;

    #[tokio::test]
    async fn test_report_scenario() {
        let budget = TestBudget::new(vec![
            Transaction::new("2024-01-01", -4500, Some("Dining"), Some("Lunch with Bob")),
            Transaction::new("2024-01-02", 200000, Some("Income"), None),
        ]);
        let out = report(&budget, &MemoFilter::new("bob"), Columns::WithAmount)
            .await
            .unwrap();
        assert_eq!(out.message(), "1 of 2 transactions matched the memo filter");
        let report = out.structure();
        assert_eq!(report.rows().len(), 1);
        assert_eq!(report.rows()[0].amount(), Some("-$4.50"));
    }

    #[tokio::test]
    async fn test_report_seed_data() {
        let budget = TestBudget::default();
        let out = report(&budget, &MemoFilter::new("bob"), Columns::WithoutAmount)
            .await
            .unwrap();
        let memos: Vec<&str> = out.structure().rows().iter().map(|r| r.memo()).collect();
        assert_eq!(memos, vec!["Lunch with Bob", "Dinner with BOB and Alice"]);
    }

    #[tokio::test]
    async fn test_report_empty_filter_skips_empty_memos() {
        let budget = TestBudget::default();
        let out = report(&budget, &MemoFilter::new(""), Columns::WithAmount)
            .await
            .unwrap();
        // two of the ten seed transactions have a null or empty memo
        assert_eq!(out.structure().rows().len(), 8);
    }

    #[tokio::test]
    async fn test_report_http_error_has_no_report() {
        let server = TestServer::start(404, r#"{"error":{"id":"404.2"}}"#).await;
        let config = Config::new(
            Some("tok".to_string()),
            Some("missing".to_string()),
            server.api_url(),
        )
        .unwrap();
        let client = YnabClient::new(&config).unwrap();
        let err = report(&client, &MemoFilter::new("x"), Columns::WithAmount)
            .await
            .unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Http);
    }

    #[tokio::test]
    async fn test_run_missing_token_fails_before_prompt_and_request() {
        // No memo is given, so reaching the prompt would read stdin. Nothing listens on the API
        // URL, so reaching the request would be a Request error.
        let api_url = TestServer::unused_api_url().await;
        let common = Common::new(LevelFilter::INFO, None, Some("b".to_string()), api_url);
        let args = Args::new(common, None, Columns::WithAmount, OutputFormat::Table);
        let err = run(&args, Mode::Ynab).await.unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Config);
    }

    #[tokio::test]
    async fn test_run_missing_budget_id_in_test_mode() {
        let common = Common::new(
            LevelFilter::INFO,
            Some("t".to_string()),
            None,
            "http://x/v1",
        );
        let args = Args::new(
            common,
            Some("bob".to_string()),
            Columns::WithAmount,
            OutputFormat::Json,
        );
        let err = run(&args, Mode::Test).await.unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Config);
    }

    #[tokio::test]
    async fn test_run_test_mode() {
        let common = Common::new(
            LevelFilter::INFO,
            Some("t".to_string()),
            Some("b".to_string()),
            "http://x/v1",
        );
        let args = Args::new(
            common,
            Some("bob".to_string()),
            Columns::WithAmount,
            OutputFormat::Json,
        );
        run(&args, Mode::Test).await.unwrap();
    }

    #[test]
    fn test_memo_filter_from_argument() {
        let filter = memo_filter(Some("Bob")).unwrap();
        assert_eq!(filter, MemoFilter::new("bob"));
    }
}
