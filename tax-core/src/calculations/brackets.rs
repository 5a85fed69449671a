//! Progressive (marginal) bracket evaluation.
//!
//! Income is allocated to each bracket's width, capped by whatever remains
//! above the bracket's floor, and taxed at that bracket's rate:
//!
//! | Bracket | Contribution |
//! |---------|--------------|
//! | not last | `min(next - floor, max(0, amount - floor)) * rate` |
//! | last     | `max(0, amount - floor) * rate` |
//!
//! Nothing is rounded here so that chained computations keep full precision.

use rust_decimal::Decimal;

use super::common::non_negative;
use crate::BracketSchedule;

/// Computes the tax owed on `taxable` under `schedule`.
///
/// Brackets whose floor lies above `taxable` contribute nothing, and a
/// negative `taxable` yields zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::evaluate;
/// use tax_core::{Bracket, BracketSchedule};
///
/// const ALABAMA: &[Bracket] = &[
///     Bracket::new(0, dec!(0.02)),
///     Bracket::new(500, dec!(0.03)),
///     Bracket::new(3000, dec!(0.05)),
/// ];
///
/// assert_eq!(evaluate(dec!(6000), &BracketSchedule::new(ALABAMA)), dec!(235));
/// ```
pub fn evaluate(
    taxable: Decimal,
    schedule: &BracketSchedule<'_>,
) -> Decimal {
    let brackets = schedule.brackets();

    brackets
        .iter()
        .enumerate()
        .map(|(i, bracket)| {
            let above_floor = non_negative(taxable - Decimal::from(bracket.threshold));
            let slice = match brackets.get(i + 1) {
                Some(next) => {
                    let width = next.threshold.saturating_sub(bracket.threshold);
                    above_floor.min(Decimal::from(width))
                }
                None => above_floor,
            };
            slice * bracket.rate
        })
        .sum()
}
