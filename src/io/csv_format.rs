//! CSV format handling for ledger records and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to ledger records
//! - Report serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{ExpenseId, GroupId, GroupReport, LedgerRecord, SplitError};
use serde::Deserialize;
use std::io::Write;

/// Raw CSV row as deserialized from the input file
///
/// Columns: `kind,group,expense,member,amount,note`. Amounts stay raw strings
/// so that validation can report the original text.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub kind: String,
    pub group: GroupId,
    #[serde(default)]
    pub expense: Option<ExpenseId>,
    #[serde(default)]
    pub member: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Convert a CSV row into a ledger record
///
/// # Arguments
///
/// * `csv_record` - The deserialized row
///
/// # Returns
///
/// * `Ok(LedgerRecord)` if the row has the columns its kind requires
/// * `Err(SplitError::ParseError)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The kind is not one of `group`, `member`, `expense`, `payment`, `split`
/// - A member row has no member id
/// - An expense, payment or split row has no expense id
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<LedgerRecord, SplitError> {
    let CsvRecord {
        kind,
        group,
        expense,
        member,
        amount,
        note,
    } = csv_record;

    let note = note.filter(|n| !n.is_empty());
    let member = member.filter(|m| !m.is_empty());
    let require_expense = || {
        expense.ok_or_else(|| {
            SplitError::parse(format!(
                "{} row for group {} is missing its expense id",
                kind, group
            ))
        })
    };

    let record = match kind.to_lowercase().as_str() {
        "group" => LedgerRecord::Group {
            group,
            name: note.unwrap_or_else(|| group.to_string()),
        },
        "member" => LedgerRecord::Member {
            group,
            member: member.ok_or_else(|| {
                SplitError::parse(format!(
                    "member row for group {} is missing its member id",
                    group
                ))
            })?,
            name: note,
        },
        "expense" => LedgerRecord::Expense {
            group,
            expense: require_expense()?,
            description: note,
        },
        "payment" => LedgerRecord::Payment {
            group,
            expense: require_expense()?,
            payer: member,
            amount,
        },
        "split" => LedgerRecord::Split {
            group,
            expense: require_expense()?,
            member,
            share: amount,
        },
        _ => {
            return Err(SplitError::parse(format!(
                "Unknown record kind '{}' for group {}",
                kind, group
            )))
        }
    };

    Ok(record)
}

/// Write reports as CSV rows
///
/// Groups appear in the order given. For each group, one `balance` row per
/// member in member order is followed by one `settlement` row per transfer in
/// planner order.
///
/// # Errors
///
/// Returns `OutputError` if writing fails.
pub fn write_reports_csv(reports: &[GroupReport], output: &mut dyn Write) -> Result<(), SplitError> {
    use csv::Writer;

    let output_error = |e: csv::Error| SplitError::OutputError {
        message: e.to_string(),
    };

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["group", "record", "member", "counterparty", "amount"])
        .map_err(output_error)?;

    for report in reports {
        let group = report.group.to_string();

        for member in &report.members {
            let balance = format!("{:.2}", member.balance);
            writer
                .write_record([
                    group.as_str(),
                    "balance",
                    member.id.as_str(),
                    "",
                    balance.as_str(),
                ])
                .map_err(output_error)?;
        }

        for settlement in &report.settlements {
            let amount = format!("{:.2}", settlement.amount);
            writer
                .write_record([
                    group.as_str(),
                    "settlement",
                    settlement.from.as_str(),
                    settlement.to.as_str(),
                    amount.as_str(),
                ])
                .map_err(output_error)?;
        }
    }

    writer.flush().map_err(|e| SplitError::OutputError {
        message: e.to_string(),
    })?;

    Ok(())
}
