//! Report types handed to output writers
//!
//! All monetary fields carry exactly two fractional digits and serialize as
//! strings (e.g. `"20.00"`).

use super::group::{ExpenseId, GroupId, MemberId};
use rust_decimal::Decimal;
use serde::Serialize;

/// Balance line for one member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberReport {
    pub id: MemberId,
    pub name: String,
    pub paid: Decimal,
    pub owed: Decimal,
    pub balance: Decimal,
}

/// Settlement line with display names resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementReport {
    pub from: MemberId,
    pub from_name: String,
    pub to: MemberId,
    pub to_name: String,
    pub amount: Decimal,
}

/// One payment or split of an expense
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineReport {
    pub member: MemberId,
    pub name: String,
    pub amount: Decimal,
}

/// Per-expense breakdown
///
/// `paid_total` sums payments and `split_total` sums splits; the two are
/// reported side by side and may differ. The individual lines follow in
/// input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSummary {
    pub id: ExpenseId,
    pub description: Option<String>,
    pub paid_total: Decimal,
    pub split_total: Decimal,
    pub payments: Vec<LineReport>,
    pub splits: Vec<LineReport>,
}

/// Everything known about one group's balances
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    pub group: GroupId,
    pub name: String,
    pub members: Vec<MemberReport>,
    pub settlements: Vec<SettlementReport>,
    pub expenses: Vec<ExpenseSummary>,
}

impl GroupReport {
    /// Whether no transfers are needed
    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}
