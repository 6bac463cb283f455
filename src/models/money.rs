//! Cent-accurate helpers for currency amounts.
//!
//! Receipt totals and prices are carried as [`Decimal`] values. Comparisons
//! that care about whole cents go through [`to_cents`], which rounds half away
//! from zero before converting to an integer count of cents. Amounts whose
//! cent count does not fit a `Decimal` have no cent value at all.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest cent, half away from zero, at scale 2.
///
/// # Examples
///
/// ```
/// use receipt_processor::models::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_to_cents(Decimal::from_str("2.005").unwrap());
/// assert_eq!(rounded.to_string(), "2.01");
///
/// let padded = round_to_cents(Decimal::from_str("9").unwrap());
/// assert_eq!(padded.to_string(), "9.00");
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Converts an amount to a whole number of cents, rounding half away from zero.
///
/// Returns `None` when the amount is too large to be expressed in cents.
///
/// # Examples
///
/// ```
/// use receipt_processor::models::to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(to_cents(Decimal::from_str("35.35").unwrap()), Some(3535));
/// assert_eq!(to_cents(Decimal::from_str("10").unwrap()), Some(1000));
/// assert_eq!(to_cents(Decimal::MAX), None);
/// ```
pub fn to_cents(amount: Decimal) -> Option<i128> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i128()
}

/// Formats an amount with exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    round_to_cents(amount).to_string()
}
