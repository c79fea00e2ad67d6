//! Common helpers for pricing calculations.
//!
//! This module provides the shared monetary rounding rule, the currency
//! formatter, and the lenient input parsers used by both the engine and the
//! display-binding layer.

use rust_decimal::Decimal;
use tracing::warn;

/// Currency glyph used by [`format_currency`]. Philippine peso.
pub const CURRENCY_SYMBOL: &str = "₱";

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tailor_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(412.774)), dec!(412.77));
/// assert_eq!(round_half_up(dec!(412.775)), dec!(412.78));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as a currency string with two fractional digits.
///
/// Equivalent to [`format_currency_dp`] with `decimals = 2`, which is what
/// every display field in the order workflow uses.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tailor_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(800)), "₱800.00");
/// assert_eq!(format_currency(dec!(1950.5)), "₱1950.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    format_currency_dp(amount, 2)
}

/// Formats an amount as a currency string with `decimals` fractional digits.
///
/// Rounding is half-up, away from zero, per the shop's financial convention;
/// shorter values are zero-padded to the requested width.
pub fn format_currency_dp(
    amount: Decimal,
    decimals: u32,
) -> String {
    let rounded = amount
        .round_dp_with_strategy(decimals, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!(
        "{CURRENCY_SYMBOL}{rounded:.prec$}",
        prec = decimals as usize
    )
}

/// Parses a quantity from form input, normalizing to a positive integer.
///
/// Empty, non-numeric, zero, and negative input all resolve to 1; fractional
/// input truncates toward zero before the minimum is applied. Never fails.
pub fn parse_quantity(input: &str) -> u32 {
    let trimmed = input.trim();
    let parsed = trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|q| q.trunc() as i64));

    match parsed {
        Some(q) if q >= 1 => q.try_into().unwrap_or(u32::MAX),
        Some(q) => {
            warn!(input = %input, parsed = q, "non-positive quantity; defaulting to 1");
            1
        }
        None => {
            if !trimmed.is_empty() {
                warn!(input = %input, "unparseable quantity; defaulting to 1");
            }
            1
        }
    }
}

/// Normalizes an already-numeric quantity to a positive integer.
///
/// Mirrors [`parse_quantity`] for records whose quantity field arrived as a
/// number: anything below 1 resolves to 1.
pub fn normalize_quantity(quantity: i64) -> u32 {
    if quantity >= 1 {
        quantity.try_into().unwrap_or(u32::MAX)
    } else {
        warn!(quantity, "non-positive quantity; defaulting to 1");
        1
    }
}

/// Parses a monetary amount from form input.
///
/// Trims whitespace and tolerates a leading currency glyph and comma
/// thousands separators (e.g. `"₱1,950.00"`). Returns `None` for empty or
/// unparseable input (logged at warn), leaving the fallback to the caller.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let normalized = input
        .trim()
        .trim_start_matches(CURRENCY_SYMBOL)
        .replace(',', "");
    if normalized.is_empty() {
        return None;
    }
    match normalized.parse::<Decimal>() {
        Ok(amount) => Some(amount),
        Err(e) => {
            warn!(input = %input, "unparseable amount: {e}");
            None
        }
    }
}
