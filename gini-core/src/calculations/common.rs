//! Common utility functions for the inequality calculations.
//!
//! This module provides the integer/decimal conversions shared by the tax
//! engine and the report, so every amount is truncated the same way.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::CalculationError;

/// Applies a percentage `rate` to `amount`, truncating toward zero.
///
/// The multiplication is done in exact decimal arithmetic, so `30` percent of
/// `450000` is exactly `135000` rather than a float a hair below it.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidParameter`] if the product does not fit
/// in an `i64`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gini_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(450000, dec!(30)).unwrap(), 135000);
/// assert_eq!(percent_of(999, dec!(10)).unwrap(), 99);
/// assert_eq!(percent_of(999, dec!(-10)).unwrap(), -99); // Toward zero
/// ```
pub fn percent_of(
    amount: i64,
    rate: Decimal,
) -> Result<i64, CalculationError> {
    Decimal::from(amount)
        .checked_mul(rate)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|share| share.trunc().to_i64())
        .ok_or_else(|| {
            CalculationError::invalid(format!("{rate}% of {amount} overflows an integer amount"))
        })
}

/// Expresses `part` as a percentage of `whole`.
///
/// Returns `None` when `whole` is zero.
pub fn percentage(
    part: f64,
    whole: f64,
) -> Option<f64> {
    if whole == 0.0 {
        None
    } else {
        Some(part / whole * 100.0)
    }
}
