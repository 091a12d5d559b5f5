//! Settlement planning
//!
//! Turns net balances into a list of directed transfers using a greedy
//! two-pointer match between the largest creditor and the largest debtor.
//! The result is deterministic but not guaranteed to be the minimum number of
//! transfers.

use crate::types::money::{is_settled, CENT};
use crate::types::{BalanceSheet, MemberId, Settlement};
use rust_decimal::Decimal;
use tracing::debug;

/// A creditor or debtor with the amount still to be matched
struct Position<'a> {
    member: &'a MemberId,
    remaining: Decimal,
}

/// Sort descending by remaining amount, keeping sheet order for ties
fn by_magnitude(positions: &mut [Position<'_>]) {
    positions.sort_by(|a, b| b.remaining.cmp(&a.remaining));
}

/// Plan the transfers that settle a balance sheet
///
/// Members whose balance is within one cent of zero are considered settled and
/// take no part. Creditors and debtors are each ordered by magnitude, and the
/// current debtor pays the current creditor the smaller of their remaining
/// amounts until either side runs out.
///
/// The function is infallible: an empty or fully settled sheet yields an
/// empty plan.
pub fn plan_settlements(balances: &BalanceSheet) -> Vec<Settlement> {
    let mut creditors: Vec<Position<'_>> = Vec::new();
    let mut debtors: Vec<Position<'_>> = Vec::new();

    for entry in balances {
        if is_settled(entry.balance) {
            continue;
        }
        if entry.balance.is_sign_positive() {
            creditors.push(Position {
                member: &entry.member,
                remaining: entry.balance,
            });
        } else {
            debtors.push(Position {
                member: &entry.member,
                remaining: -entry.balance,
            });
        }
    }

    by_magnitude(&mut creditors);
    by_magnitude(&mut debtors);

    let mut settlements = Vec::with_capacity(creditors.len() + debtors.len());
    let (mut i, mut j) = (0, 0);

    while i < creditors.len() && j < debtors.len() {
        let transfer = creditors[i].remaining.min(debtors[j].remaining);

        settlements.push(Settlement {
            from: debtors[j].member.clone(),
            to: creditors[i].member.clone(),
            amount: transfer,
        });

        creditors[i].remaining -= transfer;
        debtors[j].remaining -= transfer;

        if creditors[i].remaining < CENT {
            i += 1;
        }
        if debtors[j].remaining < CENT {
            j += 1;
        }
    }

    debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        settlements = settlements.len(),
        "planned settlements"
    );

    settlements
}
