//! Asynchronous batch processing strategy
//!
//! This module provides an asynchronous, multi-threaded implementation of the
//! ProcessingStrategy trait. It processes records in batches with group-based
//! partitioning.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (group partitioning + tasks)
//!     └── AsyncLedgerEngine (thread-safe processing)
//!         └── SharedLedger (thread-safe group state)
//! ```
//!
//! # Ordering
//!
//! - Batches are processed sequentially to keep per-group ordering across the file
//! - Within each batch, groups are processed in parallel
//! - Drafts are committed and reports built per group once input is exhausted
//! - Reports are written in ascending group order, as the sync strategy does

use crate::core::r#async::{AsyncLedgerEngine, BatchProcessor, SharedLedger};
use crate::io::async_reader::AsyncReader;
use crate::io::sync_reader::open_input;
use crate::io::write_reports;
use crate::strategy::{OutputConfig, ProcessingStrategy};
use crate::types::SplitError;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Configuration for batch processing
///
/// Both values are always positive; build one with [`BatchConfig::new`] or
/// [`BatchConfig::default`].
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of records to read per batch
    batch_size: usize,

    /// Number of runtime worker threads
    max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a configuration, replacing zero values with defaults
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                "Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches, default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn max_concurrent_batches(&self) -> usize {
        self.max_concurrent_batches
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
    output: OutputConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig, output: OutputConfig) -> Self {
        Self { config, output }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), SplitError> {
        // Missing input is reported before the runtime starts
        let file = open_input(input_path)?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| SplitError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let reports = runtime.block_on(async {
            let engine = Arc::new(AsyncLedgerEngine::new(Arc::new(SharedLedger::new())));
            let processor = BatchProcessor::new(engine);

            let file = tokio::fs::File::from_std(file);
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut records = 0usize;
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }
                records += batch.len();

                // The next batch is read only after this one completes
                for outcome in processor.process_batch(batch).await {
                    if let Err(e) = outcome.result {
                        warn!(kind = ?outcome.record.kind(), "Rejected record: {}", e);
                    }
                }
            }

            for rejection in processor.commit_all().await {
                warn!("{}", rejection);
            }

            let reports = processor.build_reports(self.output.group).await?;
            info!(records, groups = reports.len(), "processed ledger");
            Ok::<_, SplitError>(reports)
        })?;

        write_reports(&reports, self.output.format, output)
    }
}
