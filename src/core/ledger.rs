//! Ledger storage
//!
//! This module provides the `Ledger`, the in-memory store of groups, their
//! members and their validated expenses. Snapshots handed to the core are
//! owned copies, so reports never hold a borrow on the store.

use crate::core::traits::LedgerStore;
use crate::core::validation::validate_expense;
use crate::types::{
    Expense, ExpenseDraft, Group, GroupId, GroupSnapshot, Member, SplitError,
};
use std::collections::HashMap;

/// One group together with its expenses
///
/// Shared by the synchronous `Ledger` and the concurrent `SharedLedger`.
#[derive(Debug, Clone)]
pub struct GroupLedger {
    group: Group,
    expenses: Vec<Expense>,
}

impl GroupLedger {
    pub fn new(group: Group) -> Self {
        GroupLedger {
            group,
            expenses: Vec::new(),
        }
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Add a member, returning whether it was new
    pub fn add_member(&mut self, member: Member) -> bool {
        self.group.add_member(member)
    }

    /// Validate a draft and store the resulting expense
    ///
    /// # Errors
    ///
    /// Returns `DuplicateExpense` if the id is taken, otherwise any validation
    /// error. Nothing is stored on failure.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<(), SplitError> {
        if self.expenses.iter().any(|expense| expense.id == draft.id) {
            return Err(SplitError::DuplicateExpense {
                group: self.group.id,
                expense: draft.id,
            });
        }

        let expense = validate_expense(draft, &self.group)?;
        self.expenses.push(expense);
        Ok(())
    }

    /// Owned copy of the group's current state
    pub fn snapshot(&self) -> GroupSnapshot {
        GroupSnapshot {
            group: self.group.id,
            name: self.group.name.clone(),
            members: self.group.members.clone(),
            expenses: self.expenses.clone(),
        }
    }
}

/// In-memory ledger of all groups
///
/// Uses a HashMap keyed by group id; group ordering is restored when ids are
/// listed.
#[derive(Debug, Default)]
pub struct Ledger {
    groups: HashMap<GroupId, GroupLedger>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger {
            groups: HashMap::new(),
        }
    }

    /// Create a new, empty group
    ///
    /// # Errors
    ///
    /// Returns `DuplicateGroup` if the id is already in use.
    pub fn create_group(&mut self, id: GroupId, name: &str) -> Result<(), SplitError> {
        if self.groups.contains_key(&id) {
            return Err(SplitError::DuplicateGroup { group: id });
        }
        self.groups.insert(id, GroupLedger::new(Group::new(id, name)));
        Ok(())
    }

    /// Add a member to a group
    ///
    /// Returns `Ok(true)` when the member is new and `Ok(false)` when it was
    /// already present (the first display name is kept).
    ///
    /// # Errors
    ///
    /// Returns `GroupNotFound` if the group does not exist.
    pub fn add_member(&mut self, group: GroupId, member: Member) -> Result<bool, SplitError> {
        self.group_mut(group).map(|ledger| ledger.add_member(member))
    }

    /// Validate and store an expense
    ///
    /// # Errors
    ///
    /// Returns `GroupNotFound`, `DuplicateExpense`, or the first validation
    /// failure of the draft.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<(), SplitError> {
        self.group_mut(draft.group)?.add_expense(draft)
    }

    fn group_mut(&mut self, group: GroupId) -> Result<&mut GroupLedger, SplitError> {
        self.groups
            .get_mut(&group)
            .ok_or(SplitError::GroupNotFound { group })
    }
}

impl LedgerStore for Ledger {
    fn group_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = self.groups.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn snapshot(&self, group: GroupId) -> Result<GroupSnapshot, SplitError> {
        self.groups
            .get(&group)
            .map(GroupLedger::snapshot)
            .ok_or(SplitError::GroupNotFound { group })
    }

    fn member_count(&self, group: GroupId) -> usize {
        self.groups
            .get(&group)
            .map_or(0, |ledger| ledger.group().members.len())
    }
}
