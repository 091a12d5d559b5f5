//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It coordinates the SyncReader (for CSV input) and
//! the LedgerEngine (for business logic).
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Record processing and commits to `LedgerEngine`
//! - Output to `io::write_reports`

use crate::core::LedgerEngine;
use crate::io::sync_reader::SyncReader;
use crate::io::write_reports;
use crate::strategy::{OutputConfig, ProcessingStrategy};
use crate::types::SplitError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use expense_splitter::strategy::{OutputConfig, ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(OutputConfig::default());
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("ledger.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessingStrategy {
    output: OutputConfig,
}

impl SyncProcessingStrategy {
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Process a ledger file and write the reports
    ///
    /// 1. Streams records from the file through a `LedgerEngine`
    /// 2. Commits the expense drafts once input is exhausted
    /// 3. Builds the reports and writes them in the configured format
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), SplitError> {
        let reader = SyncReader::new(input_path)?;
        let mut engine = LedgerEngine::new();
        let mut records = 0usize;

        for result in reader {
            records += 1;
            match result {
                Ok(record) => {
                    let kind = record.kind();
                    if let Err(e) = engine.process(record) {
                        warn!(?kind, "Rejected record: {}", e);
                    }
                }
                Err(e) => warn!("Skipping row: {}", e),
            }
        }

        for rejection in engine.commit() {
            warn!("{}", rejection);
        }

        let reports = engine.reports(self.output.group)?;
        info!(records, groups = reports.len(), "processed ledger");

        write_reports(&reports, self.output.format, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ReportFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const LEDGER: &str = "kind,group,expense,member,amount,note\n\
                          group,1,,,,Trip\n\
                          member,1,,alice,,Alice\n\
                          member,1,,bob,,Bob\n\
                          payment,1,1,alice,50.00,\n\
                          split,1,1,alice,25.00,\n\
                          split,1,1,bob,25.00,\n";

    #[test]
    fn test_sync_strategy_writes_csv() {
        let file = create_temp_csv(LEDGER);
        let strategy = SyncProcessingStrategy::default();
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "group,record,member,counterparty,amount\n\
             1,balance,alice,,25.00\n\
             1,balance,bob,,-25.00\n\
             1,settlement,bob,alice,25.00\n"
        );
    }

    #[test]
    fn test_sync_strategy_writes_json() {
        let file = create_temp_csv(LEDGER);
        let strategy = SyncProcessingStrategy::new(OutputConfig {
            format: ReportFormat::Json,
            group: None,
        });
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value[0]["name"], "Trip");
        assert_eq!(value[0]["settlements"][0]["from_name"], "Bob");
        assert_eq!(value[0]["settlements"][0]["amount"], "25.00");
    }

    #[test]
    fn test_sync_strategy_missing_file() {
        let strategy = SyncProcessingStrategy::default();
        let mut output = Vec::new();

        let result = strategy.process(Path::new("/nonexistent/ledger.csv"), &mut output);

        assert!(matches!(result, Err(SplitError::FileNotFound { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_sync_strategy_unknown_group_filter() {
        let file = create_temp_csv(LEDGER);
        let strategy = SyncProcessingStrategy::new(OutputConfig {
            format: ReportFormat::Csv,
            group: Some(2),
        });
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);

        assert_eq!(result.unwrap_err(), SplitError::GroupNotFound { group: 2 });
    }
}
