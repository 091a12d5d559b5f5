//! Expense Splitter Library
//! # Overview
//!
//! This library computes, for groups of people sharing expenses, how much each
//! member is owed or owes, and a short list of transfers that settles every
//! balance. Ledgers are read from CSV with either a sync or an async strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Group, Expense, BalanceSheet, reports, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::balance_calculator`] - Net balance per member
//!   - [`core::settlement_planner`] - Greedy debtor to creditor transfers
//!   - [`core::validation`] - Expense draft validation
//!   - [`core::ledger`] - Group, member and expense storage
//!   - [`core::engine`] - Record processing orchestration
//!   - [`core::report`] - Report assembly
//! - [`io`] - CSV input and CSV/JSON output
//! - [`strategy`] - Complete processing pipelines
//!
//! # Record Types
//!
//! The ledger input supports five record kinds:
//!
//! - **group**: Create a group
//! - **member**: Add a member to a group
//! - **expense**: Describe an expense
//! - **payment**: Record that a member paid toward an expense
//! - **split**: Record a member's share of an expense
//!
//! # Balances
//!
//! Each member's balance is `paid - owed`. Positive balances are owed money,
//! negative balances owe money, and balances within 0.01 of zero are settled.

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{
    build_report, compute_balances, plan_settlements, validate_expense, Ledger, LedgerEngine,
    LedgerStore, SharedLedger,
};
pub use io::{write_reports_csv, write_reports_json};
pub use types::{
    BalanceSheet, Expense, ExpenseDraft, Group, GroupId, GroupReport, GroupSnapshot,
    LedgerRecord, Member, MemberId, NetBalance, Settlement, SplitError,
};
