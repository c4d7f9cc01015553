//! The memo report: a fixed set of columns projected from the matching transactions.

use crate::error::{ErrorType, IntoResult, Res};
use crate::model::Transaction;
use crate::Result;
use anyhow::Context;
use comfy_table::{Cell, CellAlignment, Table, TableComponent};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const DATE: &str = "date";
const AMOUNT: &str = "amount";
const CATEGORY_NAME: &str = "category_name";
const MEMO: &str = "memo";

/// Which of the two report schemas to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Columns {
    /// `date, amount, category_name, memo`
    #[default]
    WithAmount,
    /// `date, category_name, memo`
    WithoutAmount,
}

serde_plain::derive_display_from_serialize!(Columns);
serde_plain::derive_fromstr_from_deserialize!(Columns);

impl Columns {
    /// The column headers, in order.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Columns::WithAmount => &[DATE, AMOUNT, CATEGORY_NAME, MEMO],
            Columns::WithoutAmount => &[DATE, CATEGORY_NAME, MEMO],
        }
    }
}

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A text table.
    #[default]
    Table,
    /// A JSON array of objects, one per row.
    Json,
    /// CSV with a header row.
    Csv,
}

serde_plain::derive_display_from_serialize!(OutputFormat);
serde_plain::derive_fromstr_from_deserialize!(OutputFormat);

/// One row of the report. `amount` is the formatted display string and is `None` exactly when the
/// report was built with `Columns::WithoutAmount`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ReportRow {
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<String>,
    category_name: Option<String>,
    memo: String,
}

impl ReportRow {
    fn new(transaction: &Transaction, columns: Columns) -> Self {
        Self {
            date: transaction.date().to_string(),
            amount: match columns {
                Columns::WithAmount => Some(transaction.amount().to_string()),
                Columns::WithoutAmount => None,
            },
            category_name: transaction.category_name().map(String::from),
            memo: transaction.memo().unwrap_or_default().to_string(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category_name.as_deref()
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    /// The cell values in header order. A missing category is an empty cell.
    fn cells(&self) -> Vec<&str> {
        let mut cells = vec![self.date.as_str()];
        if let Some(amount) = &self.amount {
            cells.push(amount);
        }
        cells.push(self.category_name().unwrap_or_default());
        cells.push(&self.memo);
        cells
    }
}

/// The assembled report. A report with zero rows is valid and still has its headers.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip)]
    columns: Columns,
    rows: Vec<ReportRow>,
}

impl Report {
    /// Projects `transactions` into rows, keeping their order.
    pub fn new<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        columns: Columns,
    ) -> Self {
        Self {
            columns,
            rows: transactions
                .into_iter()
                .map(|t| ReportRow::new(t, columns))
                .collect(),
        }
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.columns.headers()
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.table().to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(&self.rows)
                .context("Unable to serialize the report as JSON")
                .pub_result(ErrorType::Output),
            OutputFormat::Csv => self.csv().pub_result(ErrorType::Output),
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.remove_style(TableComponent::HorizontalLines);
        table.remove_style(TableComponent::MiddleIntersections);
        table.remove_style(TableComponent::LeftBorderIntersections);
        table.remove_style(TableComponent::RightBorderIntersections);
        table.set_header(self.headers().to_vec());

        let amount_ix = self.headers().iter().position(|h| *h == AMOUNT);
        for row in &self.rows {
            table.add_row(row.cells().into_iter().enumerate().map(|(ix, value)| {
                let cell = Cell::new(value);
                if Some(ix) == amount_ix {
                    cell.set_alignment(CellAlignment::Right)
                } else {
                    cell
                }
            }));
        }
        table
    }

    fn csv(&self) -> Res<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(self.headers())?;
        for row in &self.rows {
            writer.write_record(row.cells())?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Unable to flush CSV output: {e}"))?;
        String::from_utf8(bytes).context("CSV output was not UTF-8")
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table())
    }
}
