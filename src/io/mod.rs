//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report rows)
//! - `json_format` - JSON report output
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod json_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, write_reports_csv, CsvRecord};
pub use json_format::write_reports_json;
pub use sync_reader::SyncReader;

use crate::cli::ReportFormat;
use crate::types::{GroupReport, SplitError};
use std::io::Write;

/// Write reports in the requested format
pub fn write_reports(
    reports: &[GroupReport],
    format: ReportFormat,
    output: &mut dyn Write,
) -> Result<(), SplitError> {
    match format {
        ReportFormat::Csv => write_reports_csv(reports, output),
        ReportFormat::Json => write_reports_json(reports, output),
    }
}
