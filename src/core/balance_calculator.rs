//! Net balance computation
//!
//! Aggregates every payment and split of a group snapshot into per-member
//! totals. The calculation is pure: it reads the snapshot and nothing else.
//!
//! # Balance Rules
//!
//! - Each member starts with `paid = 0` and `owed = 0`
//! - A payment adds its amount to the payer's `paid`
//! - A split adds its share to the member's `owed`
//! - `balance = paid - owed`; positive means the member is owed money

use crate::types::{BalanceSheet, GroupSnapshot, NetBalance, SplitError};
use std::collections::HashMap;
use tracing::debug;

/// Compute the net balance of every member of a group
///
/// Entries are returned in the snapshot's member order. A group without
/// members yields an empty sheet.
///
/// # Arguments
///
/// * `snapshot` - Members and expenses of one group
///
/// # Returns
///
/// * `Ok(BalanceSheet)` with one entry per member
/// * `Err(SplitError)` if the snapshot is inconsistent or a total overflows
///
/// # Errors
///
/// Returns an error if:
/// - A payment or split names a member absent from the snapshot (`InvalidMember`)
/// - A running total exceeds the decimal range (`ArithmeticOverflow`)
pub fn compute_balances(snapshot: &GroupSnapshot) -> Result<BalanceSheet, SplitError> {
    let mut entries: Vec<NetBalance> = snapshot
        .members
        .iter()
        .map(|member| NetBalance::zero(member.id.clone()))
        .collect();

    let slots: HashMap<&str, usize> = snapshot
        .members
        .iter()
        .enumerate()
        .map(|(slot, member)| (member.id.as_str(), slot))
        .collect();

    let slot_of = |member: &str| {
        slots
            .get(member)
            .copied()
            .ok_or_else(|| SplitError::invalid_member(member, snapshot.group))
    };

    for expense in &snapshot.expenses {
        for payment in &expense.payments {
            let entry = &mut entries[slot_of(&payment.payer)?];
            entry.paid = entry
                .paid
                .checked_add(payment.amount)
                .ok_or_else(|| SplitError::arithmetic_overflow("paid total", &payment.payer))?;
        }

        for split in &expense.splits {
            let entry = &mut entries[slot_of(&split.member)?];
            entry.owed = entry
                .owed
                .checked_add(split.share)
                .ok_or_else(|| SplitError::arithmetic_overflow("owed total", &split.member))?;
        }
    }

    for entry in &mut entries {
        entry.balance = entry
            .paid
            .checked_sub(entry.owed)
            .ok_or_else(|| SplitError::arithmetic_overflow("balance", &entry.member))?;
    }

    debug!(
        group = snapshot.group,
        members = entries.len(),
        expenses = snapshot.expenses.len(),
        "computed balances"
    );

    Ok(BalanceSheet::new(entries))
}
