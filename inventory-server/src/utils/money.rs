//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel as `f64` on the wire and in the model; aggregate
//! arithmetic is done in `Decimal` so that sums like `0.1 + 0.2` come out
//! exact before display rounding.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Input values are validated finite at the boundary. If NaN/Infinity
/// somehow reaches here, logs an error and returns ZERO to avoid silent
/// data corruption in the aggregates.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round a monetary amount to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a monetary amount with the two-decimal display convention ("25.00")
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}
