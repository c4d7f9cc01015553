use crate::error::Res;
use anyhow::{bail, Context};
use std::io::{BufRead, Write};

/// Writes `message` to `output`, then reads one line from `input` and returns it without its line
/// terminator. Any other whitespace is kept as typed.
pub(crate) fn prompt(
    mut input: impl BufRead,
    mut output: impl Write,
    message: &str,
) -> Res<String> {
    write!(output, "{message}").context("Unable to write the prompt")?;
    output.flush().context("Unable to flush the prompt")?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("Unable to read from stdin")?;
    if n == 0 {
        bail!("No input was received, stdin is closed");
    }
    if let Some(stripped) = line.strip_suffix('\n') {
        line = stripped.strip_suffix('\r').unwrap_or(stripped).to_string();
    }
    Ok(line)
}
