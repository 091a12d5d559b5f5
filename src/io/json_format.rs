//! JSON report output
//!
//! Reports are written as one pretty-printed array. Monetary values serialize
//! as strings with two fractional digits.

use crate::types::{GroupReport, SplitError};
use std::io::Write;

/// Write reports as a pretty-printed JSON array followed by a newline
///
/// # Errors
///
/// Returns `OutputError` if serialization or writing fails.
pub fn write_reports_json(reports: &[GroupReport], output: &mut dyn Write) -> Result<(), SplitError> {
    let output_error = |message: String| SplitError::OutputError { message };

    serde_json::to_writer_pretty(&mut *output, reports).map_err(|e| output_error(e.to_string()))?;
    writeln!(output).map_err(|e| output_error(e.to_string()))?;
    output.flush().map_err(|e| output_error(e.to_string()))?;

    Ok(())
}
