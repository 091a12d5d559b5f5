//! Core traits shared by the ledger implementations
//!
//! This module defines the read side of the ledger so that reports can be
//! built from either the synchronous `Ledger` or the concurrent
//! `SharedLedger`.

use crate::types::{GroupId, GroupSnapshot, SplitError};

/// Read access to stored groups
///
/// Implementations can be synchronous (using HashMap) or concurrent (using DashMap).
pub trait LedgerStore {
    /// All group ids, ascending
    fn group_ids(&self) -> Vec<GroupId>;

    /// Owned copy of one group's members and expenses
    fn snapshot(&self, group: GroupId) -> Result<GroupSnapshot, SplitError>;

    /// Number of members that have joined a group, 0 for unknown groups
    fn member_count(&self, group: GroupId) -> usize;
}
