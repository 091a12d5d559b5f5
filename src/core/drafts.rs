//! Pending expense drafts
//!
//! Expense, payment and split records are gathered here until input is
//! exhausted, then committed in the order their expense was first seen.

use crate::types::{ExpenseDraft, ExpenseId, GroupId, LedgerRecord, PaymentDraft, SplitDraft};
use std::collections::HashMap;

/// Drafts keyed by (group, expense), remembering first-seen order
#[derive(Debug, Default)]
pub struct DraftBook {
    order: Vec<(GroupId, ExpenseId)>,
    drafts: HashMap<(GroupId, ExpenseId), ExpenseDraft>,
}

impl DraftBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft for an expense, created empty on first use
    pub fn entry_mut(&mut self, group: GroupId, expense: ExpenseId) -> &mut ExpenseDraft {
        let order = &mut self.order;
        self.drafts.entry((group, expense)).or_insert_with(|| {
            order.push((group, expense));
            ExpenseDraft::new(group, expense)
        })
    }

    /// Add an expense, payment or split record to its draft
    ///
    /// `roster` is the group's member count when the record was read; payment
    /// and split lines keep it so that validation only accepts members who
    /// had joined by then. Group and member records are ignored.
    pub fn stage(&mut self, record: LedgerRecord, roster: usize) {
        match record {
            LedgerRecord::Expense {
                group,
                expense,
                description,
            } => {
                let draft = self.entry_mut(group, expense);
                if description.is_some() {
                    draft.description = description;
                }
            }
            LedgerRecord::Payment {
                group,
                expense,
                payer,
                amount,
            } => self
                .entry_mut(group, expense)
                .payments
                .push(PaymentDraft {
                    payer,
                    amount,
                    roster: Some(roster),
                }),
            LedgerRecord::Split {
                group,
                expense,
                member,
                share,
            } => self
                .entry_mut(group, expense)
                .splits
                .push(SplitDraft {
                    member,
                    share,
                    roster: Some(roster),
                }),
            LedgerRecord::Group { .. } | LedgerRecord::Member { .. } => {}
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove and return every draft in first-seen order
    pub fn drain(&mut self) -> Vec<ExpenseDraft> {
        let mut drafts = std::mem::take(&mut self.drafts);
        std::mem::take(&mut self.order)
            .into_iter()
            .filter_map(|key| drafts.remove(&key))
            .collect()
    }
}
