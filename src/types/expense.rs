//! Expense-related types
//!
//! This module defines validated expenses (payments and splits with
//! two-decimal amounts), the unvalidated drafts they are built from, and the
//! group snapshot handed to the balance calculator.

use super::group::{ExpenseId, GroupId, Member, MemberId};
use rust_decimal::Decimal;

/// Money contributed by one payer toward an expense
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    /// Member who paid
    pub payer: MemberId,

    /// Amount paid, non-negative with two fractional digits
    pub amount: Decimal,
}

/// Share of an expense assigned to one beneficiary
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// Member who owes the share
    pub member: MemberId,

    /// Share owed, non-negative with two fractional digits
    pub share: Decimal,
}

/// A validated expense
///
/// Every payer and split member belongs to the expense's group. Payment and
/// split totals are independent and may disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Expense identifier, unique within the group
    pub id: ExpenseId,

    /// Group the expense belongs to
    pub group: GroupId,

    /// Optional free-form description
    pub description: Option<String>,

    /// Who paid and how much
    pub payments: Vec<Payment>,

    /// Who owes and how much
    pub splits: Vec<Split>,
}

impl Expense {
    /// Sum of all payments
    pub fn paid_total(&self) -> Decimal {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Sum of all split shares
    pub fn split_total(&self) -> Decimal {
        self.splits.iter().map(|s| s.share).sum()
    }
}

/// Unvalidated payment line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentDraft {
    pub payer: Option<MemberId>,
    pub amount: Option<String>,

    /// Group size when the line was recorded; `None` checks the full membership
    pub roster: Option<usize>,
}

/// Unvalidated split line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitDraft {
    pub member: Option<MemberId>,
    pub share: Option<String>,

    /// Group size when the line was recorded; `None` checks the full membership
    pub roster: Option<usize>,
}

/// Expense creation request
///
/// Built once from input records and validated as a whole: the first invalid
/// field rejects the entire draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub group: GroupId,
    pub id: ExpenseId,
    pub description: Option<String>,
    pub payments: Vec<PaymentDraft>,
    pub splits: Vec<SplitDraft>,
}

impl ExpenseDraft {
    /// Create an empty draft
    pub fn new(group: GroupId, id: ExpenseId) -> Self {
        ExpenseDraft {
            group,
            id,
            description: None,
            payments: Vec::new(),
            splits: Vec::new(),
        }
    }

    /// Append a payment line
    pub fn payment(mut self, payer: &str, amount: &str) -> Self {
        self.payments.push(PaymentDraft {
            payer: Some(payer.to_string()),
            amount: Some(amount.to_string()),
            roster: None,
        });
        self
    }

    /// Append a split line
    pub fn split(mut self, member: &str, share: &str) -> Self {
        self.splits.push(SplitDraft {
            member: Some(member.to_string()),
            share: Some(share.to_string()),
            roster: None,
        });
        self
    }

    /// Set the description
    pub fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Consistent read of one group, the sole input of the balance calculator
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSnapshot {
    pub group: GroupId,
    pub name: String,
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
}

impl GroupSnapshot {
    /// Display name for a member id, if the member is known
    pub fn member_name(&self, member: &str) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.id == member)
            .map(|m| m.name.as_str())
    }
}
