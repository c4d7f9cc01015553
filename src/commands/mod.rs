//! Command handlers for the ynab-memo CLI.

mod report;

use crate::report::{OutputFormat, Report};
use crate::{Error, Result};
use serde::Serialize;
use std::fmt::Debug;
use std::io::Write;
use tracing::{error, info, Level};

pub use report::{memo_filter, report, run};

/// The output type for a command: a message about the outcome and the structured data it produced.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// The structured data that needs to be output from the call.
    structure: T,
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> &T {
        &self.structure
    }
}

impl Out<Report> {
    /// Logs the message with `info!` and writes the report to stdout in `format`.
    pub fn print(&self, format: OutputFormat) -> Result<()> {
        info!("{}", self.message);
        println!("{}", self.structure.render(format)?);
        Ok(())
    }
}

/// Reports a failed run. The error is logged when the log filter lets errors through, otherwise it
/// is written to `output` so that a failure is never silent.
pub fn print_error(e: &Error, mut output: impl Write) {
    if tracing::enabled!(Level::ERROR) {
        error!("Exiting with error: {e}");
    } else {
        let _ = writeln!(output, "Error: {e}");
    }
}
