//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `group`: Groups, members and identifiers
//! - `expense`: Expenses, payments, splits, drafts and snapshots
//! - `balance`: Net balances and settlements
//! - `report`: Report structures consumed by output writers
//! - `record`: Parsed ledger input records
//! - `money`: Two-decimal amount parsing and normalization
//! - `error`: Error types for the expense splitter

pub mod balance;
pub mod error;
pub mod expense;
pub mod group;
pub mod money;
pub mod record;
pub mod report;

pub use balance::{BalanceSheet, NetBalance, Settlement};
pub use error::SplitError;
pub use expense::{Expense, ExpenseDraft, GroupSnapshot, Payment, PaymentDraft, Split, SplitDraft};
pub use group::{ExpenseId, Group, GroupId, Member, MemberId};
pub use record::{LedgerRecord, RecordKind};
pub use report::{ExpenseSummary, GroupReport, LineReport, MemberReport, SettlementReport};
