//! Processing strategy module for ledger processing
//!
//! This module defines the Strategy pattern for complete processing pipelines,
//! encompassing CSV parsing, ledger updates, report assembly and output. This
//! allows different processing implementations (synchronous, asynchronous
//! batch) to be selected at runtime. Both produce identical output for the same
//! input.

use crate::cli::{ReportFormat, StrategyType};
use crate::types::{GroupId, SplitError};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Report output settings shared by every strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,

    /// Restrict the output to one group
    pub group: Option<GroupId>,
}

/// Processing strategy trait for complete ledger processing pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Process a ledger file and write the reports to output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file containing ledger records
    /// * `output` - Writer receiving the reports
    ///
    /// # Returns
    ///
    /// * `Ok(())` if processing completed (possibly with rejected records)
    /// * `Err(SplitError)` if a fatal error occurred
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (`FileNotFound`, `IoError`)
    /// - The requested group does not exist (`GroupNotFound`)
    /// - Output cannot be written (`OutputError`)
    ///
    /// Rejected rows, records and expenses are logged with `tracing::warn!`
    /// and do not stop processing.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), SplitError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch processing (ignored for sync)
/// * `output` - Report format and group filter
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
    output: OutputConfig,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(output)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, output))
        }
    }
}
