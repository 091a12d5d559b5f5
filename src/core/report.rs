//! Report assembly
//!
//! Combines the balance calculator and the settlement planner into a
//! `GroupReport` with display names resolved and every amount normalized to
//! two decimal places.

use crate::core::balance_calculator::compute_balances;
use crate::core::settlement_planner::plan_settlements;
use crate::core::traits::LedgerStore;
use crate::types::money::normalize;
use crate::types::{
    ExpenseSummary, GroupId, GroupReport, GroupSnapshot, LineReport, MemberReport,
    SettlementReport, SplitError,
};

/// Build the report for one group
///
/// Members appear in group order, settlements in planner order and expenses
/// in the order they were added, each with its payments and splits.
///
/// # Errors
///
/// Propagates any error from [`compute_balances`].
pub fn build_report(snapshot: &GroupSnapshot) -> Result<GroupReport, SplitError> {
    let sheet = compute_balances(snapshot)?;
    let settlements = plan_settlements(&sheet);

    let display_name = |member: &str| {
        snapshot
            .member_name(member)
            .unwrap_or(member)
            .to_string()
    };

    let members = sheet
        .iter()
        .map(|entry| MemberReport {
            id: entry.member.clone(),
            name: display_name(&entry.member),
            paid: normalize(entry.paid),
            owed: normalize(entry.owed),
            balance: normalize(entry.balance),
        })
        .collect();

    let settlements = settlements
        .into_iter()
        .map(|settlement| SettlementReport {
            from_name: display_name(&settlement.from),
            to_name: display_name(&settlement.to),
            from: settlement.from,
            to: settlement.to,
            amount: normalize(settlement.amount),
        })
        .collect();

    let expenses = snapshot
        .expenses
        .iter()
        .map(|expense| ExpenseSummary {
            id: expense.id,
            description: expense.description.clone(),
            paid_total: normalize(expense.paid_total()),
            split_total: normalize(expense.split_total()),
            payments: expense
                .payments
                .iter()
                .map(|payment| LineReport {
                    member: payment.payer.clone(),
                    name: display_name(&payment.payer),
                    amount: normalize(payment.amount),
                })
                .collect(),
            splits: expense
                .splits
                .iter()
                .map(|split| LineReport {
                    member: split.member.clone(),
                    name: display_name(&split.member),
                    amount: normalize(split.share),
                })
                .collect(),
        })
        .collect();

    Ok(GroupReport {
        group: snapshot.group,
        name: snapshot.name.clone(),
        members,
        settlements,
        expenses,
    })
}

/// Build reports for every group in a store, or for a single group
///
/// # Errors
///
/// Returns `GroupNotFound` if `filter` names a missing group, or the first
/// error raised while building a report.
pub fn build_reports<S: LedgerStore + ?Sized>(
    store: &S,
    filter: Option<GroupId>,
) -> Result<Vec<GroupReport>, SplitError> {
    let groups = match filter {
        Some(group) => vec![group],
        None => store.group_ids(),
    };

    groups
        .into_iter()
        .map(|group| build_report(&store.snapshot(group)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::Ledger;
    use crate::types::{ExpenseDraft, Member};
    use rust_decimal::Decimal;

    fn trip_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.create_group(1, "Weekend").unwrap();
        for (id, name) in [("alice", "Alice"), ("bob", "Bob"), ("carol", "Carol")] {
            ledger.add_member(1, Member::new(id, name)).unwrap();
        }
        ledger
            .add_expense(
                ExpenseDraft::new(1, 10)
                    .described("Dinner")
                    .payment("alice", "30.00")
                    .split("alice", "10.00")
                    .split("bob", "10.00")
                    .split("carol", "10.00"),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn test_report_for_single_payer() {
        let report = build_report(&trip_ledger().snapshot(1).unwrap()).unwrap();

        assert_eq!(report.name, "Weekend");
        let balances: Vec<String> = report.members.iter().map(|m| m.balance.to_string()).collect();
        assert_eq!(balances, vec!["20.00", "-10.00", "-10.00"]);
        assert_eq!(report.members[0].paid.to_string(), "30.00");
        assert_eq!(report.members[1].owed.to_string(), "10.00");

        assert_eq!(report.settlements.len(), 2);
        assert_eq!(report.settlements[0].from, "bob");
        assert_eq!(report.settlements[0].to_name, "Alice");
        assert_eq!(report.settlements[1].from_name, "Carol");
        assert_eq!(report.settlements[1].amount.to_string(), "10.00");

        assert_eq!(report.expenses[0].description.as_deref(), Some("Dinner"));
        assert_eq!(report.expenses[0].paid_total.to_string(), "30.00");
        assert_eq!(report.expenses[0].split_total.to_string(), "30.00");
    }

    #[test]
    fn test_expense_lines_use_display_names() {
        let report = build_report(&trip_ledger().snapshot(1).unwrap()).unwrap();
        let expense = &report.expenses[0];

        assert_eq!(
            expense.payments,
            vec![LineReport {
                member: "alice".to_string(),
                name: "Alice".to_string(),
                amount: Decimal::new(3000, 2),
            }]
        );
        let split_names: Vec<&str> = expense.splits.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(split_names, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(expense.splits[2].member, "carol");
        assert_eq!(expense.splits[2].amount.to_string(), "10.00");
    }

    #[test]
    fn test_totals_are_reported_independently() {
        let mut ledger = Ledger::new();
        ledger.create_group(1, "Pair").unwrap();
        ledger.add_member(1, Member::with_id("a")).unwrap();
        ledger.add_member(1, Member::with_id("b")).unwrap();
        ledger
            .add_expense(ExpenseDraft::new(1, 1).payment("a", "30").split("b", "10"))
            .unwrap();

        let report = build_report(&ledger.snapshot(1).unwrap()).unwrap();

        assert_eq!(report.expenses[0].paid_total.to_string(), "30.00");
        assert_eq!(report.expenses[0].split_total.to_string(), "10.00");
        assert_eq!(report.settlements.len(), 1);
        assert_eq!(report.settlements[0].amount.to_string(), "10.00");
    }

    #[test]
    fn test_empty_group_report() {
        let mut ledger = Ledger::new();
        ledger.create_group(4, "Empty").unwrap();

        let report = build_report(&ledger.snapshot(4).unwrap()).unwrap();

        assert!(report.members.is_empty());
        assert!(report.is_settled());
        assert!(report.expenses.is_empty());
    }

    #[test]
    fn test_zero_balances_print_without_sign() {
        let mut ledger = trip_ledger();
        ledger
            .add_expense(
                ExpenseDraft::new(1, 11)
                    .payment("bob", "10.00")
                    .payment("carol", "10.00")
                    .split("alice", "20.00"),
            )
            .unwrap();

        let report = build_report(&ledger.snapshot(1).unwrap()).unwrap();

        assert!(report.members.iter().all(|m| m.balance.to_string() == "0.00"));
        assert!(report.is_settled());
    }

    #[test]
    fn test_build_reports_filter() {
        let mut ledger = trip_ledger();
        ledger.create_group(2, "Flat").unwrap();

        let all = build_reports(&ledger, None).unwrap();
        assert_eq!(all.iter().map(|r| r.group).collect::<Vec<_>>(), vec![1, 2]);

        let one = build_reports(&ledger, Some(2)).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].name, "Flat");

        assert_eq!(
            build_reports(&ledger, Some(3)).unwrap_err(),
            SplitError::GroupNotFound { group: 3 }
        );
    }
}
