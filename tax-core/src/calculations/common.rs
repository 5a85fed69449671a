//! Common utility functions for tax calculations.
//!
//! Clamping and effective-rate helpers shared by the federal rule and every
//! jurisdiction rule, so that all of them apply the same numeric policy.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

/// Rounds to `dp` decimal places, with midpoints rounded away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.455), 2), dec!(123.46));
/// assert_eq!(round_half_up(dec!(0.0000125), 6), dec!(0.000013));
/// assert_eq!(round_half_up(dec!(-2.5), 0), dec!(-3));
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a value at zero. Taxable income and tax owed never go negative.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-12.5)), dec!(0));
/// assert_eq!(non_negative(dec!(12.5)), dec!(12.5));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

/// Tax owed as a fraction of gross income.
///
/// A filer with no gross income has an effective rate of zero rather than
/// an undefined one.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::effective_rate;
///
/// assert_eq!(effective_rate(dec!(235), dec!(10000)), dec!(0.0235));
/// assert_eq!(effective_rate(dec!(235), dec!(0)), dec!(0));
/// ```
pub fn effective_rate(
    tax: Decimal,
    gross_income: Decimal,
) -> Decimal {
    if gross_income.is_zero() {
        trace!(%tax, "no gross income, effective rate is zero");
        return Decimal::ZERO;
    }
    tax / gross_income
}
