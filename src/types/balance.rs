//! Derived balance and settlement types
//!
//! Neither type is ever persisted; both live for a single report computation.

use super::group::MemberId;
use rust_decimal::Decimal;
use serde::Serialize;

/// Net position of one member within a group
#[derive(Debug, Clone, PartialEq)]
pub struct NetBalance {
    /// The member this balance belongs to
    pub member: MemberId,

    /// Total the member paid across all expenses
    pub paid: Decimal,

    /// Total of the member's split shares
    pub owed: Decimal,

    /// `paid - owed`; positive means the member is owed money
    pub balance: Decimal,
}

impl NetBalance {
    /// A member with nothing paid and nothing owed
    pub fn zero(member: MemberId) -> Self {
        NetBalance {
            member,
            paid: Decimal::ZERO,
            owed: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// Net balances of every member of a group, in member order
///
/// Order matters: the settlement planner breaks ties by it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceSheet {
    entries: Vec<NetBalance>,
}

impl BalanceSheet {
    pub fn new(entries: Vec<NetBalance>) -> Self {
        BalanceSheet { entries }
    }

    /// Build a sheet from bare `(member, balance)` pairs
    ///
    /// Positive balances are recorded as paid, negative ones as owed.
    pub fn from_balances<I, M>(balances: I) -> Self
    where
        I: IntoIterator<Item = (M, Decimal)>,
        M: Into<MemberId>,
    {
        let entries = balances
            .into_iter()
            .map(|(member, balance)| NetBalance {
                member: member.into(),
                paid: balance.max(Decimal::ZERO),
                owed: (-balance).max(Decimal::ZERO),
                balance,
            })
            .collect();
        BalanceSheet { entries }
    }

    /// Balance of a member, if the member is on the sheet
    pub fn get(&self, member: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|entry| entry.member == member)
            .map(|entry| entry.balance)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NetBalance> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[NetBalance] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all balances; zero when every expense is balanced
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.balance).sum()
    }
}

impl<'a> IntoIterator for &'a BalanceSheet {
    type Item = &'a NetBalance;
    type IntoIter = std::slice::Iter<'a, NetBalance>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A directed transfer from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    /// Member who pays
    pub from: MemberId,

    /// Member who receives
    pub to: MemberId,

    /// Amount transferred, always positive
    pub amount: Decimal,
}
