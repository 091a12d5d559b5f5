//! Two-decimal money handling
//!
//! All monetary values are `rust_decimal::Decimal` rescaled to exactly two
//! fractional digits. Inputs with more precision are rejected rather than
//! rounded, and values up to 99,999,999.99 are accepted.

use super::SplitError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Number of fractional digits carried by every amount
pub const MONEY_SCALE: u32 = 2;

/// One cent (0.01), the settlement tolerance
///
/// Balances whose magnitude does not exceed this value are considered settled.
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, MONEY_SCALE);

/// Largest accepted amount (99,999,999.99)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, MONEY_SCALE);

/// Parse a raw amount or share into a two-decimal value
///
/// # Arguments
///
/// * `field` - Field name used in error messages ("amount" or "share")
/// * `raw` - The raw input, `None` when the field was absent
///
/// # Errors
///
/// Returns `InvalidAmount` when the value is missing or blank, not a number,
/// negative, carries more than two fractional digits, or exceeds [`MAX_AMOUNT`].
pub fn parse_amount(field: &str, raw: Option<&str>) -> Result<Decimal, SplitError> {
    let trimmed = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(SplitError::invalid_amount(field, None, "is required")),
    };

    let value = Decimal::from_str(trimmed)
        .map_err(|_| SplitError::invalid_amount(field, Some(trimmed), "is not a number"))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(SplitError::invalid_amount(
            field,
            Some(trimmed),
            "must not be negative",
        ));
    }

    if value.normalize().scale() > MONEY_SCALE {
        return Err(SplitError::invalid_amount(
            field,
            Some(trimmed),
            "has more than two decimal places",
        ));
    }

    if value > MAX_AMOUNT {
        return Err(SplitError::invalid_amount(
            field,
            Some(trimmed),
            "exceeds the maximum of 99999999.99",
        ));
    }

    Ok(normalize(value))
}

/// Rescale a value to exactly two fractional digits
///
/// Zero is always returned unsigned so it never renders as `-0.00`.
pub fn normalize(value: Decimal) -> Decimal {
    if value.is_zero() {
        return Decimal::new(0, MONEY_SCALE);
    }
    let mut value = value.round_dp(MONEY_SCALE);
    value.rescale(MONEY_SCALE);
    value
}

/// Whether a balance is within one cent of zero
pub fn is_settled(balance: Decimal) -> bool {
    balance.abs() <= CENT
}
