//! Thread-safe ledger storage
//!
//! `SharedLedger` offers the same operations as `Ledger` through `&self`,
//! backed by a DashMap so that different groups can be updated from different
//! tasks without a global lock.

use crate::core::ledger::GroupLedger;
use crate::core::traits::LedgerStore;
use crate::types::{ExpenseDraft, Group, GroupId, GroupSnapshot, Member, SplitError};
use dashmap::DashMap;

/// Concurrent in-memory ledger
///
/// Operations on the same group are serialized by the map's shard locks;
/// operations on different groups proceed in parallel.
#[derive(Debug)]
pub struct SharedLedger {
    groups: DashMap<GroupId, GroupLedger>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self {
            groups: DashMap::new(),
        }
    }

    /// Create a new, empty group
    ///
    /// # Errors
    ///
    /// Returns `DuplicateGroup` if the id is already in use.
    pub fn create_group(&self, id: GroupId, name: &str) -> Result<(), SplitError> {
        let mut created = false;
        self.groups.entry(id).or_insert_with(|| {
            created = true;
            GroupLedger::new(Group::new(id, name))
        });

        if created {
            Ok(())
        } else {
            Err(SplitError::DuplicateGroup { group: id })
        }
    }

    /// Add a member to a group, returning whether it was new
    ///
    /// # Errors
    ///
    /// Returns `GroupNotFound` if the group does not exist.
    pub fn add_member(&self, group: GroupId, member: Member) -> Result<bool, SplitError> {
        self.update(group, |ledger| Ok(ledger.add_member(member)))
    }

    /// Validate and store an expense
    ///
    /// # Errors
    ///
    /// Returns `GroupNotFound`, `DuplicateExpense`, or the first validation
    /// failure of the draft.
    pub fn add_expense(&self, draft: ExpenseDraft) -> Result<(), SplitError> {
        self.update(draft.group, |ledger| ledger.add_expense(draft))
    }

    /// Run a closure against one group while holding its lock
    fn update<F, T>(&self, group: GroupId, f: F) -> Result<T, SplitError>
    where
        F: FnOnce(&mut GroupLedger) -> Result<T, SplitError>,
    {
        let mut entry = self
            .groups
            .get_mut(&group)
            .ok_or(SplitError::GroupNotFound { group })?;
        f(entry.value_mut())
    }
}

impl Default for SharedLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for SharedLedger {
    fn group_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = self.groups.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }

    fn snapshot(&self, group: GroupId) -> Result<GroupSnapshot, SplitError> {
        self.groups
            .get(&group)
            .map(|entry| entry.value().snapshot())
            .ok_or(SplitError::GroupNotFound { group })
    }

    fn member_count(&self, group: GroupId) -> usize {
        self.groups
            .get(&group)
            .map_or(0, |entry| entry.value().group().members.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_create_group_once() {
        let ledger = SharedLedger::new();

        assert!(ledger.create_group(1, "Trip").is_ok());
        assert_eq!(
            ledger.create_group(1, "Trip again").unwrap_err(),
            SplitError::DuplicateGroup { group: 1 }
        );
        assert_eq!(ledger.snapshot(1).unwrap().name, "Trip");
    }

    #[test]
    fn test_members_and_expenses() {
        let ledger = SharedLedger::new();
        ledger.create_group(1, "Trip").unwrap();

        assert!(ledger.add_member(1, Member::with_id("alice")).unwrap());
        assert!(!ledger.add_member(1, Member::with_id("alice")).unwrap());
        ledger
            .add_expense(ExpenseDraft::new(1, 1).payment("alice", "4.50"))
            .unwrap();

        let snapshot = ledger.snapshot(1).unwrap();
        assert_eq!(snapshot.members.len(), 1);
        assert_eq!(snapshot.expenses[0].paid_total().to_string(), "4.50");
    }

    #[test]
    fn test_unknown_group() {
        let ledger = SharedLedger::new();

        assert_eq!(
            ledger.add_member(2, Member::with_id("alice")).unwrap_err(),
            SplitError::GroupNotFound { group: 2 }
        );
        assert_eq!(
            ledger.add_expense(ExpenseDraft::new(2, 1)).unwrap_err(),
            SplitError::GroupNotFound { group: 2 }
        );
    }

    #[test]
    fn test_concurrent_group_creation() {
        use std::thread;

        let ledger = Arc::new(SharedLedger::new());
        let handles: Vec<_> = (0..8)
            .map(|id| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    ledger.create_group(id % 4, "g").is_ok()
                })
            })
            .collect();

        let created = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(created, 4);
        assert_eq!(ledger.group_ids(), vec![0, 1, 2, 3]);
    }
}
