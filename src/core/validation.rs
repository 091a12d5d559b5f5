//! Expense validation
//!
//! Every expense enters the ledger through [`validate_expense`]. A draft is
//! checked as a whole, payments first and then splits, each in order, and the
//! first invalid field rejects the entire draft.

use crate::types::money::parse_amount;
use crate::types::{Expense, ExpenseDraft, Group, MemberId, Payment, Split, SplitError};

/// Validate a draft against the membership of its group
///
/// A line that carries a `roster` is checked against the members who had
/// joined when it was recorded; other lines against the current membership.
///
/// # Arguments
///
/// * `draft` - The unvalidated expense
/// * `group` - The group the expense is being added to
///
/// # Returns
///
/// * `Ok(Expense)` with every amount normalized to two decimal places
/// * `Err(SplitError)` describing the first invalid field
///
/// # Errors
///
/// For each payment line, then each split line:
/// - `MissingField` if the payer or split member is absent
/// - `InvalidAmount` if the amount or share is missing, malformed, negative,
///   too precise or too large
/// - `InvalidMember` if the payer or split member is not in the group, or had
///   not joined yet when the line was recorded
pub fn validate_expense(draft: ExpenseDraft, group: &Group) -> Result<Expense, SplitError> {
    let payments = draft
        .payments
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let context = format!("payment {}", index + 1);
            let payer = require_member(line.payer, "payer", &context)?;
            let amount = parse_amount("amount", line.amount.as_deref())?;
            ensure_member(&payer, line.roster, group)?;
            Ok(Payment { payer, amount })
        })
        .collect::<Result<Vec<_>, SplitError>>()?;

    let splits = draft
        .splits
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let context = format!("split {}", index + 1);
            let member = require_member(line.member, "member", &context)?;
            let share = parse_amount("share", line.share.as_deref())?;
            ensure_member(&member, line.roster, group)?;
            Ok(Split { member, share })
        })
        .collect::<Result<Vec<_>, SplitError>>()?;

    Ok(Expense {
        id: draft.id,
        group: draft.group,
        description: draft.description,
        payments,
        splits,
    })
}

fn require_member(
    member: Option<MemberId>,
    field: &str,
    context: &str,
) -> Result<MemberId, SplitError> {
    match member.map(|m| m.trim().to_string()) {
        Some(m) if !m.is_empty() => Ok(m),
        _ => Err(SplitError::missing_field(field, context)),
    }
}

fn ensure_member(member: &str, roster: Option<usize>, group: &Group) -> Result<(), SplitError> {
    if group.had_member(member, roster) {
        Ok(())
    } else {
        Err(SplitError::invalid_member(member, group.id))
    }
}
