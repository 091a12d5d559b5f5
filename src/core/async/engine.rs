//! Ledger processing for async batch processing
//!
//! This module provides the `AsyncLedgerEngine`, which applies ledger records
//! to a `SharedLedger` and keeps pending expense drafts per group.
//!
//! # Architecture
//!
//! ```text
//! AsyncLedgerEngine
//!     ├── Arc<SharedLedger>           (thread-safe group state)
//!     └── DashMap<GroupId, DraftBook> (pending drafts, one book per group)
//! ```
//!
//! Records of one group must be applied sequentially; records of different
//! groups may be applied concurrently.

use super::SharedLedger;
use crate::core::drafts::DraftBook;
use crate::core::report::build_report;
use crate::core::traits::LedgerStore;
use crate::types::{GroupId, GroupReport, LedgerRecord, Member, SplitError};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Thread-safe ledger engine
#[derive(Debug)]
pub struct AsyncLedgerEngine {
    ledger: Arc<SharedLedger>,
    drafts: DashMap<GroupId, DraftBook>,
}

impl AsyncLedgerEngine {
    /// Create an engine over a shared ledger
    pub fn new(ledger: Arc<SharedLedger>) -> Self {
        Self {
            ledger,
            drafts: DashMap::new(),
        }
    }

    /// Process a single ledger record
    ///
    /// Group and member records are applied to the ledger immediately. Expense,
    /// payment and split records are staged in their group's draft book along
    /// with the group's current member count.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateGroup` or `GroupNotFound` for failed group and member
    /// records.
    pub fn process_record(&self, record: LedgerRecord) -> Result<(), SplitError> {
        match record {
            LedgerRecord::Group { group, name } => {
                self.ledger.create_group(group, &name)?;
                debug!(group, "created group");
            }
            LedgerRecord::Member {
                group,
                member,
                name,
            } => {
                let added = self.ledger.add_member(group, Member::from_record(member, name))?;
                debug!(group, added, "applied member");
            }
            draft_line => {
                let group = draft_line.group();
                let roster = self.ledger.member_count(group);
                self.drafts.entry(group).or_default().stage(draft_line, roster);
            }
        }
        Ok(())
    }

    /// Groups with drafts waiting to be committed, ascending
    pub fn pending_groups(&self) -> Vec<GroupId> {
        let mut groups: Vec<GroupId> = self.drafts.iter().map(|entry| *entry.key()).collect();
        groups.sort_unstable();
        groups
    }

    /// Commit the pending drafts of one group in first-seen order
    ///
    /// Returns one `ExpenseRejected` error per draft that failed.
    pub fn commit_group(&self, group: GroupId) -> Vec<SplitError> {
        let Some((_, mut book)) = self.drafts.remove(&group) else {
            return Vec::new();
        };

        let mut rejected = Vec::new();
        for draft in book.drain() {
            let expense = draft.id;
            match self.ledger.add_expense(draft) {
                Ok(()) => debug!(group, expense, "committed expense"),
                Err(error) => rejected.push(SplitError::expense_rejected(group, expense, error)),
            }
        }
        rejected
    }

    /// Build the report of one group
    pub fn report(&self, group: GroupId) -> Result<GroupReport, SplitError> {
        build_report(&self.ledger.snapshot(group)?)
    }

    /// Get a reference to the shared ledger
    pub fn ledger(&self) -> &Arc<SharedLedger> {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AsyncLedgerEngine {
        AsyncLedgerEngine::new(Arc::new(SharedLedger::new()))
    }

    fn setup(engine: &AsyncLedgerEngine, group: GroupId, members: &[&str]) {
        engine
            .process_record(LedgerRecord::Group {
                group,
                name: format!("Group {}", group),
            })
            .unwrap();
        for member in members {
            engine
                .process_record(LedgerRecord::Member {
                    group,
                    member: member.to_string(),
                    name: None,
                })
                .unwrap();
        }
    }

    fn setup_member(engine: &AsyncLedgerEngine, group: GroupId, member: &str) {
        engine
            .process_record(LedgerRecord::Member {
                group,
                member: member.to_string(),
                name: None,
            })
            .unwrap();
    }

    fn line(group: GroupId, expense: u32, split: bool, member: &str, amount: &str) -> LedgerRecord {
        if split {
            LedgerRecord::Split {
                group,
                expense,
                member: Some(member.to_string()),
                share: Some(amount.to_string()),
            }
        } else {
            LedgerRecord::Payment {
                group,
                expense,
                payer: Some(member.to_string()),
                amount: Some(amount.to_string()),
            }
        }
    }

    #[test]
    fn test_commit_and_report() {
        let engine = engine();
        setup(&engine, 1, &["alice", "bob"]);
        engine.process_record(line(1, 1, false, "alice", "50.00")).unwrap();
        engine.process_record(line(1, 1, true, "alice", "25.00")).unwrap();
        engine.process_record(line(1, 1, true, "bob", "25.00")).unwrap();

        assert_eq!(engine.pending_groups(), vec![1]);
        assert!(engine.commit_group(1).is_empty());
        assert!(engine.pending_groups().is_empty());

        let report = engine.report(1).unwrap();
        assert_eq!(report.settlements.len(), 1);
        assert_eq!(report.settlements[0].from, "bob");
        assert_eq!(report.settlements[0].amount.to_string(), "25.00");
    }

    #[test]
    fn test_rejections_are_per_expense() {
        let engine = engine();
        setup(&engine, 2, &["alice"]);
        engine.process_record(line(2, 1, false, "alice", "1.005")).unwrap();
        engine.process_record(line(2, 2, false, "alice", "1.00")).unwrap();

        let rejected = engine.commit_group(2);

        assert_eq!(rejected.len(), 1);
        assert!(matches!(
            rejected[0],
            SplitError::ExpenseRejected { group: 2, expense: 1, .. }
        ));
        assert_eq!(engine.ledger().snapshot(2).unwrap().expenses.len(), 1);
    }

    #[test]
    fn test_late_member_rejects_earlier_lines() {
        let engine = engine();
        setup(&engine, 1, &["alice"]);
        engine.process_record(line(1, 1, false, "alice", "9.00")).unwrap();
        engine.process_record(line(1, 1, true, "zed", "9.00")).unwrap();
        setup_member(&engine, 1, "zed");

        assert_eq!(
            engine.commit_group(1),
            vec![SplitError::expense_rejected(
                1,
                1,
                SplitError::invalid_member("zed", 1)
            )]
        );
        assert!(engine.ledger().snapshot(1).unwrap().expenses.is_empty());
    }

    #[test]
    fn test_commit_without_drafts_is_empty() {
        let engine = engine();
        assert!(engine.commit_group(7).is_empty());
    }

    #[test]
    fn test_duplicate_group_record_fails() {
        let engine = engine();
        setup(&engine, 1, &[]);

        let result = engine.process_record(LedgerRecord::Group {
            group: 1,
            name: "again".to_string(),
        });

        assert_eq!(result.unwrap_err(), SplitError::DuplicateGroup { group: 1 });
    }
}
