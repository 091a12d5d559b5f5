//! Ledger engine
//!
//! This module provides the `LedgerEngine`, which applies parsed ledger
//! records to a `Ledger` and assembles expense drafts.
//!
//! The engine enforces these rules:
//! - Group and member records apply immediately; a failure affects only that record
//! - Expense, payment and split records are gathered into a draft per
//!   (group, expense) and validated only on `commit`, so one bad line rejects
//!   its whole expense
//! - A payer or split member must already belong to the group when its line
//!   is read
//! - Drafts are committed in the order their expense was first seen

use crate::core::drafts::DraftBook;
use crate::core::ledger::Ledger;
use crate::core::report::build_reports;
use crate::core::traits::LedgerStore;
use crate::types::{GroupId, GroupReport, LedgerRecord, Member, SplitError};
use tracing::debug;

/// Ledger processing engine
///
/// Owns the ledger and the pending drafts. Used by the synchronous strategy.
#[derive(Debug, Default)]
pub struct LedgerEngine {
    ledger: Ledger,
    drafts: DraftBook,
}

impl LedgerEngine {
    /// Create an engine with an empty ledger and no pending drafts
    pub fn new() -> Self {
        LedgerEngine {
            ledger: Ledger::new(),
            drafts: DraftBook::new(),
        }
    }

    /// Process a single ledger record
    ///
    /// # Arguments
    ///
    /// * `record` - The record to apply
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the record was applied or added to its draft
    /// * `Err(SplitError)` if a group or member record failed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A group record reuses an existing group id (`DuplicateGroup`)
    /// - A member record names a missing group (`GroupNotFound`)
    pub fn process(&mut self, record: LedgerRecord) -> Result<(), SplitError> {
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
                let roster = self.ledger.member_count(draft_line.group());
                self.drafts.stage(draft_line, roster);
            }
        }
        Ok(())
    }

    /// Commit every pending draft to the ledger
    ///
    /// Returns one `ExpenseRejected` error per draft that failed; rejected
    /// drafts are discarded.
    pub fn commit(&mut self) -> Vec<SplitError> {
        let mut rejected = Vec::new();
        for draft in self.drafts.drain() {
            let (group, expense) = (draft.group, draft.id);
            match self.ledger.add_expense(draft) {
                Ok(()) => debug!(group, expense, "committed expense"),
                Err(error) => rejected.push(SplitError::expense_rejected(group, expense, error)),
            }
        }
        rejected
    }

    /// Build reports for every group, or only for `filter`
    pub fn reports(&self, filter: Option<GroupId>) -> Result<Vec<GroupReport>, SplitError> {
        build_reports(&self.ledger, filter)
    }

    /// Get a reference to the ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(group: GroupId, name: &str) -> LedgerRecord {
        LedgerRecord::Group {
            group,
            name: name.to_string(),
        }
    }

    fn member(group: GroupId, member: &str) -> LedgerRecord {
        LedgerRecord::Member {
            group,
            member: member.to_string(),
            name: None,
        }
    }

    fn payment(group: GroupId, expense: u32, payer: &str, amount: &str) -> LedgerRecord {
        LedgerRecord::Payment {
            group,
            expense,
            payer: Some(payer.to_string()),
            amount: Some(amount.to_string()),
        }
    }

    fn split(group: GroupId, expense: u32, member: &str, share: &str) -> LedgerRecord {
        LedgerRecord::Split {
            group,
            expense,
            member: Some(member.to_string()),
            share: Some(share.to_string()),
        }
    }

    fn engine_with_pair() -> LedgerEngine {
        let mut engine = LedgerEngine::new();
        engine.process(group(1, "Pair")).unwrap();
        engine.process(member(1, "alice")).unwrap();
        engine.process(member(1, "bob")).unwrap();
        engine
    }

    #[test]
    fn test_records_build_an_expense() {
        let mut engine = engine_with_pair();
        engine
            .process(LedgerRecord::Expense {
                group: 1,
                expense: 7,
                description: Some("Groceries".to_string()),
            })
            .unwrap();
        engine.process(payment(1, 7, "alice", "50.00")).unwrap();
        engine.process(split(1, 7, "alice", "25.00")).unwrap();
        engine.process(split(1, 7, "bob", "25.00")).unwrap();

        assert!(engine.commit().is_empty());

        let reports = engine.reports(None).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].expenses[0].description.as_deref(), Some("Groceries"));
        assert_eq!(reports[0].settlements[0].from, "bob");
        assert_eq!(reports[0].settlements[0].amount.to_string(), "25.00");
    }

    #[test]
    fn test_member_without_name_uses_id() {
        let engine = engine_with_pair();
        let snapshot = engine.ledger().snapshot(1).unwrap();
        assert_eq!(snapshot.member_name("bob"), Some("bob"));
    }

    #[test]
    fn test_group_and_member_errors_are_per_record() {
        let mut engine = engine_with_pair();

        assert_eq!(
            engine.process(group(1, "Again")).unwrap_err(),
            SplitError::DuplicateGroup { group: 1 }
        );
        assert_eq!(
            engine.process(member(2, "carol")).unwrap_err(),
            SplitError::GroupNotFound { group: 2 }
        );
        assert!(engine.process(member(1, "carol")).is_ok());
    }

    #[test]
    fn test_one_bad_line_rejects_the_whole_expense() {
        let mut engine = engine_with_pair();
        engine.process(payment(1, 1, "alice", "20.00")).unwrap();
        engine.process(split(1, 1, "bob", "oops")).unwrap();
        engine.process(payment(1, 2, "bob", "5.00")).unwrap();
        engine.process(split(1, 2, "alice", "5.00")).unwrap();

        let rejected = engine.commit();

        assert_eq!(rejected.len(), 1);
        match &rejected[0] {
            SplitError::ExpenseRejected {
                group,
                expense,
                source,
            } => {
                assert_eq!((*group, *expense), (1, 1));
                assert!(matches!(**source, SplitError::InvalidAmount { .. }));
            }
            other => panic!("Expected ExpenseRejected, got {:?}", other),
        }

        let snapshot = engine.ledger().snapshot(1).unwrap();
        assert_eq!(snapshot.expenses.len(), 1);
        assert_eq!(snapshot.expenses[0].id, 2);
    }

    #[test]
    fn test_expense_for_missing_group_is_rejected() {
        let mut engine = LedgerEngine::new();
        engine.process(payment(3, 1, "alice", "1.00")).unwrap();

        let rejected = engine.commit();

        assert_eq!(
            rejected,
            vec![SplitError::expense_rejected(
                3,
                1,
                SplitError::GroupNotFound { group: 3 }
            )]
        );
    }

    #[test]
    fn test_member_added_after_expense_lines_is_rejected() {
        let mut engine = LedgerEngine::new();
        engine.process(group(1, "Late")).unwrap();
        engine.process(member(1, "alice")).unwrap();
        engine.process(payment(1, 1, "alice", "9.00")).unwrap();
        engine.process(split(1, 1, "zed", "9.00")).unwrap();
        engine.process(member(1, "zed")).unwrap();
        engine.process(payment(1, 2, "zed", "4.00")).unwrap();
        engine.process(split(1, 2, "alice", "4.00")).unwrap();

        assert_eq!(
            engine.commit(),
            vec![SplitError::expense_rejected(
                1,
                1,
                SplitError::invalid_member("zed", 1)
            )]
        );

        let reports = engine.reports(Some(1)).unwrap();
        assert_eq!(reports[0].expenses.len(), 1);
        assert_eq!(reports[0].members[1].id, "zed");
        assert_eq!(reports[0].members[1].balance.to_string(), "4.00");
    }
}
