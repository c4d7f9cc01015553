//! These structs provide the CLI interface for the ynab-memo CLI.

use crate::config::{ACCESS_TOKEN_ENV, API_URL_ENV, BUDGET_ID_ENV, DEFAULT_API_URL};
use crate::report::{Columns, OutputFormat};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

/// ynab-memo: Find YNAB transactions by memo.
///
/// Downloads the transactions of a YNAB budget (see https://ynab.com), keeps those whose memo
/// contains the filter text, ignoring case, and prints them as a report with their date, amount,
/// category and memo.
///
/// You will need a YNAB personal access token and the ID of your budget. These are read from
/// YNAB_ACCESS_TOKEN and YNAB_BUDGET_ID, which may also be placed in a .env file in the current
/// directory.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    /// The text to look for in transaction memos. If omitted, you will be prompted for it.
    #[arg(long, short)]
    memo: Option<String>,

    /// Which columns to print.
    #[arg(long, value_enum, default_value_t = Columns::WithAmount)]
    columns: Columns,

    /// How to print the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl Args {
    pub fn new(
        common: Common,
        memo: Option<String>,
        columns: Columns,
        format: OutputFormat,
    ) -> Self {
        Self {
            common,
            memo,
            columns,
            format,
        }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn memo(&self) -> Option<&str> {
        self.memo.as_deref()
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Logging and credential arguments.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The YNAB personal access token.
    #[arg(long, env = ACCESS_TOKEN_ENV, hide_env_values = true)]
    access_token: Option<String>,

    /// The ID of the YNAB budget to read transactions from.
    #[arg(long, env = BUDGET_ID_ENV)]
    budget_id: Option<String>,

    /// The base URL of the YNAB API.
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,
}

impl Common {
    pub fn new(
        log_level: LevelFilter,
        access_token: Option<String>,
        budget_id: Option<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            log_level,
            access_token,
            budget_id,
            api_url: api_url.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn budget_id(&self) -> Option<&str> {
        self.budget_id.as_deref()
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}
