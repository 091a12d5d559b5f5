//! Error types for the expense splitter
//!
//! This module defines all error types that can occur while loading a ledger,
//! validating expenses and assembling group reports.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, output failures
//! - **CSV Parsing Errors**: Malformed rows, unknown record kinds, bad identifiers
//! - **Validation Errors**: Unknown members, missing fields, invalid amounts
//! - **Ledger Errors**: Unknown or duplicate groups and expenses
//! - **Arithmetic Errors**: Overflow while aggregating balances

use super::{ExpenseId, GroupId};
use thiserror::Error;

/// Main error type for the expense splitter
///
/// Each variant includes the context needed to locate the offending
/// record, member or expense.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitError {
    /// File not found at the specified path
    ///
    /// Fatal: prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the ledger
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Report output could not be written
    #[error("Failed to write report: {message}")]
    OutputError {
        /// Description of the write failure
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable: the malformed record is skipped and processing
    /// continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A payment or split references someone outside the group
    #[error("Member '{member}' is not a member of group {group}")]
    InvalidMember {
        /// The unknown member identifier
        member: String,
        /// Group the expense belongs to
        group: GroupId,
    },

    /// Amount or share is missing, malformed, negative or too precise
    ///
    /// Never coerced to zero.
    #[error("Invalid {field}{}: {reason}", value.as_ref().map(|v| format!(" '{}'", v)).unwrap_or_default())]
    InvalidAmount {
        /// Which field was rejected ("amount" or "share")
        field: String,
        /// The raw input, if any was given
        value: Option<String>,
        /// Why the value was rejected
        reason: String,
    },

    /// A required identifier is missing from a payment or split
    #[error("{context} is missing its {field}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Where the field was expected, e.g. "payment 2"
        context: String,
    },

    /// Group does not exist in the ledger
    #[error("Group {group} not found")]
    GroupNotFound {
        /// The requested group
        group: GroupId,
    },

    /// Group identifier already in use
    #[error("Group {group} already exists")]
    DuplicateGroup {
        /// The duplicated group
        group: GroupId,
    },

    /// Expense identifier already in use within its group
    #[error("Expense {expense} already exists in group {group}")]
    DuplicateExpense {
        /// Group the expense belongs to
        group: GroupId,
        /// The duplicated expense
        expense: ExpenseId,
    },

    /// An expense draft failed validation and was not stored
    #[error("Expense {expense} in group {group} rejected: {source}")]
    ExpenseRejected {
        /// Group the expense belongs to
        group: GroupId,
        /// The rejected expense
        expense: ExpenseId,
        /// The first validation failure
        #[source]
        source: Box<SplitError>,
    },

    /// Arithmetic overflow would occur while aggregating
    #[error("Arithmetic overflow in {operation} for member '{member}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Member whose total overflowed
        member: String,
    },
}

impl From<std::io::Error> for SplitError {
    fn from(error: std::io::Error) -> Self {
        SplitError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for SplitError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SplitError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl SplitError {
    /// Create an InvalidMember error
    pub fn invalid_member(member: &str, group: GroupId) -> Self {
        SplitError::InvalidMember {
            member: member.to_string(),
            group,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(field: &str, value: Option<&str>, reason: &str) -> Self {
        SplitError::InvalidAmount {
            field: field.to_string(),
            value: value.map(str::to_string),
            reason: reason.to_string(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: &str, context: &str) -> Self {
        SplitError::MissingField {
            field: field.to_string(),
            context: context.to_string(),
        }
    }

    /// Create a ParseError without line information
    pub fn parse(message: impl Into<String>) -> Self {
        SplitError::ParseError {
            line: None,
            message: message.into(),
        }
    }

    /// Create an ExpenseRejected error wrapping the validation failure
    pub fn expense_rejected(group: GroupId, expense: ExpenseId, source: SplitError) -> Self {
        SplitError::ExpenseRejected {
            group,
            expense,
            source: Box::new(source),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, member: &str) -> Self {
        SplitError::ArithmeticOverflow {
            operation: operation.to_string(),
            member: member.to_string(),
        }
    }

    /// Attach a line number to a parse error; other variants pass through
    pub fn at_line(self, line: u64) -> Self {
        match self {
            SplitError::ParseError { message, .. } => SplitError::ParseError {
                line: Some(line),
                message,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        SplitError::FileNotFound { path: "ledger.csv".to_string() },
        "File not found: ledger.csv"
    )]
    #[case::io_error(
        SplitError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        SplitError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        SplitError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_member(
        SplitError::InvalidMember { member: "mallory".to_string(), group: 3 },
        "Member 'mallory' is not a member of group 3"
    )]
    #[case::invalid_amount_with_value(
        SplitError::invalid_amount("amount", Some("-5.00"), "must not be negative"),
        "Invalid amount '-5.00': must not be negative"
    )]
    #[case::invalid_amount_missing(
        SplitError::invalid_amount("share", None, "is required"),
        "Invalid share: is required"
    )]
    #[case::missing_field(
        SplitError::missing_field("payer", "payment 2"),
        "payment 2 is missing its payer"
    )]
    #[case::group_not_found(
        SplitError::GroupNotFound { group: 9 },
        "Group 9 not found"
    )]
    #[case::duplicate_expense(
        SplitError::DuplicateExpense { group: 1, expense: 4 },
        "Expense 4 already exists in group 1"
    )]
    #[case::expense_rejected(
        SplitError::expense_rejected(1, 4, SplitError::invalid_member("mallory", 1)),
        "Expense 4 in group 1 rejected: Member 'mallory' is not a member of group 1"
    )]
    #[case::arithmetic_overflow(
        SplitError::arithmetic_overflow("payment", "alice"),
        "Arithmetic overflow in payment for member 'alice'"
    )]
    fn test_error_display(#[case] error: SplitError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_at_line_only_touches_parse_errors() {
        let parse = SplitError::parse("bad row").at_line(7);
        assert_eq!(
            parse,
            SplitError::ParseError {
                line: Some(7),
                message: "bad row".to_string()
            }
        );

        let other = SplitError::GroupNotFound { group: 1 }.at_line(7);
        assert_eq!(other, SplitError::GroupNotFound { group: 1 });
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: SplitError = io_error.into();
        assert!(matches!(error, SplitError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
