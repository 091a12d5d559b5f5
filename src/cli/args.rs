use crate::strategy::{BatchConfig, OutputConfig};
use crate::types::GroupId;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute group balances and settlement plans from a ledger file
#[derive(Parser, Debug)]
#[command(name = "expense-splitter")]
#[command(about = "Compute group balances and the transfers that settle them", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing ledger records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Processing strategy to use for the ledger
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of records per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Output format for the reports
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        help = "Report format: 'csv' for balance and settlement rows or 'json' for full reports"
    )]
    pub format: ReportFormat,

    /// Report on a single group only
    #[arg(long = "group", value_name = "ID", help = "Only report the given group id")]
    pub group: Option<GroupId>,
}

/// Available processing strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Available report formats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Uses the provided values or falls back to defaults. Zero values are
    /// replaced by defaults with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size()),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches()),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// Create the output settings from CLI arguments
    pub fn to_output_config(&self) -> OutputConfig {
        OutputConfig {
            format: self.format,
            group: self.group,
        }
    }
}
