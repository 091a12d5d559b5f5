//! Core business logic module
//!
//! This module contains the expense splitting components:
//! - `balance_calculator` - Net balance per member
//! - `settlement_planner` - Greedy debtor to creditor transfers
//! - `validation` - Expense draft validation
//! - `ledger` - Group, member and expense storage
//! - `drafts` - Pending expense drafts
//! - `engine` - Record processing orchestration
//! - `report` - Report assembly
//! - `traits` - Read access shared by the ledger implementations
//! - `async` - Concurrent implementations

pub mod r#async;
pub mod balance_calculator;
pub mod drafts;
pub mod engine;
pub mod ledger;
pub mod report;
pub mod settlement_planner;
pub mod traits;
pub mod validation;

pub use balance_calculator::compute_balances;
pub use engine::LedgerEngine;
pub use ledger::{GroupLedger, Ledger};
pub use r#async::{AsyncLedgerEngine, BatchProcessor, SharedLedger};
pub use report::{build_report, build_reports};
pub use settlement_planner::plan_settlements;
pub use traits::LedgerStore;
pub use validation::validate_expense;
