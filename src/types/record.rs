//! Ledger input records
//!
//! One record per input row. Group and member records mutate the ledger
//! directly; expense, payment and split records build up an expense draft.

use super::group::{ExpenseId, GroupId, MemberId};

/// Record kinds accepted in the ledger input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Create a group
    Group,

    /// Add a member to a group
    Member,

    /// Describe an expense
    Expense,

    /// Add a payment line to an expense
    Payment,

    /// Add a split line to an expense
    Split,
}

/// A parsed ledger record
///
/// Payment and split lines keep their raw, unvalidated values; they are
/// checked when the expense they belong to is committed.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerRecord {
    Group {
        group: GroupId,
        name: String,
    },
    Member {
        group: GroupId,
        member: MemberId,
        name: Option<String>,
    },
    Expense {
        group: GroupId,
        expense: ExpenseId,
        description: Option<String>,
    },
    Payment {
        group: GroupId,
        expense: ExpenseId,
        payer: Option<MemberId>,
        amount: Option<String>,
    },
    Split {
        group: GroupId,
        expense: ExpenseId,
        member: Option<MemberId>,
        share: Option<String>,
    },
}

impl LedgerRecord {
    /// The group this record applies to
    pub fn group(&self) -> GroupId {
        match self {
            LedgerRecord::Group { group, .. }
            | LedgerRecord::Member { group, .. }
            | LedgerRecord::Expense { group, .. }
            | LedgerRecord::Payment { group, .. }
            | LedgerRecord::Split { group, .. } => *group,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            LedgerRecord::Group { .. } => RecordKind::Group,
            LedgerRecord::Member { .. } => RecordKind::Member,
            LedgerRecord::Expense { .. } => RecordKind::Expense,
            LedgerRecord::Payment { .. } => RecordKind::Payment,
            LedgerRecord::Split { .. } => RecordKind::Split,
        }
    }
}
