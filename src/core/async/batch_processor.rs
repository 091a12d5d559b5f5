//! Batch processing with group-based partitioning
//!
//! This module provides the `BatchProcessor`, which partitions ledger records
//! by group and applies each group's records in its own tokio task.
//!
//! # Ordering
//!
//! - Within a batch, each group's records keep their input order
//! - Batches are processed one after another, so order also holds across batches
//! - Different groups never share state and proceed in parallel
//!
//! Commits and reports are likewise spawned per group and awaited in ascending
//! group order, which keeps the output identical to the synchronous strategy.

use std::collections::HashMap;
use std::sync::Arc;

use super::AsyncLedgerEngine;
use crate::core::traits::LedgerStore;
use crate::types::{GroupId, GroupReport, LedgerRecord, SplitError};
use tracing::error;

/// Outcome of applying one record
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// The record that was applied
    pub record: LedgerRecord,

    /// Whether it was applied successfully
    pub result: Result<(), SplitError>,
}

/// Batch processor for concurrent, group-partitioned processing
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    engine: Arc<AsyncLedgerEngine>,
}

impl BatchProcessor {
    pub fn new(engine: Arc<AsyncLedgerEngine>) -> Self {
        Self { engine }
    }

    /// Group a batch of records by group id, preserving order within each group
    pub fn partition_by_group(
        &self,
        batch: Vec<LedgerRecord>,
    ) -> HashMap<GroupId, Vec<LedgerRecord>> {
        let mut group_batches: HashMap<GroupId, Vec<LedgerRecord>> = HashMap::new();

        for record in batch {
            group_batches.entry(record.group()).or_default().push(record);
        }

        group_batches
    }

    /// Apply one group's records sequentially
    pub async fn process_group_records(&self, records: Vec<LedgerRecord>) -> Vec<ProcessingResult> {
        let mut results = Vec::with_capacity(records.len());

        for record in records {
            let result = self.engine.process_record(record.clone());
            results.push(ProcessingResult { record, result });
        }

        results
    }

    /// Process a batch, one task per group
    ///
    /// Waits for every task before returning so the next batch observes all
    /// effects of this one.
    pub async fn process_batch(&self, batch: Vec<LedgerRecord>) -> Vec<ProcessingResult> {
        let group_batches = self.partition_by_group(batch);

        let mut tasks = Vec::with_capacity(group_batches.len());
        for (_group, records) in group_batches {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move {
                processor.process_group_records(records).await
            }));
        }

        let mut results = Vec::new();
        for task in tasks {
            match task.await {
                Ok(group_results) => results.extend(group_results),
                Err(e) => error!("Task panicked: {:?}", e),
            }
        }

        results
    }

    /// Commit every pending draft, one task per group
    ///
    /// Rejections are returned in ascending group order.
    pub async fn commit_all(&self) -> Vec<SplitError> {
        let tasks: Vec<_> = self
            .engine
            .pending_groups()
            .into_iter()
            .map(|group| {
                let engine = Arc::clone(&self.engine);
                tokio::spawn(async move { engine.commit_group(group) })
            })
            .collect();

        let mut rejected = Vec::new();
        for task in tasks {
            match task.await {
                Ok(group_rejected) => rejected.extend(group_rejected),
                Err(e) => error!("Task panicked: {:?}", e),
            }
        }
        rejected
    }

    /// Build reports concurrently, ascending by group id
    ///
    /// # Errors
    ///
    /// Returns `GroupNotFound` if `filter` names a missing group, the first
    /// error raised while building a report, or an I/O error if a task failed.
    pub async fn build_reports(
        &self,
        filter: Option<GroupId>,
    ) -> Result<Vec<GroupReport>, SplitError> {
        let groups = match filter {
            Some(group) => vec![group],
            None => self.engine.ledger().group_ids(),
        };

        let tasks: Vec<_> = groups
            .into_iter()
            .map(|group| {
                let engine = Arc::clone(&self.engine);
                tokio::spawn(async move { engine.report(group) })
            })
            .collect();

        let mut reports = Vec::with_capacity(tasks.len());
        for task in tasks {
            let report = task.await.map_err(|e| SplitError::IoError {
                message: format!("Report task failed: {}", e),
            })??;
            reports.push(report);
        }
        Ok(reports)
    }
}
