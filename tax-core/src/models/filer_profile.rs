use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// Everything a rule needs to know about the person being taxed.
///
/// A profile is built once per invocation (or once per row of an income
/// sweep) and never mutated by the rules that read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilerProfile {
    /// Wages and other ordinary income.
    pub income: Decimal,

    /// Long-term capital gains.
    pub capital_gains: Decimal,

    /// Dividends and interest.
    pub dividends: Decimal,

    /// Number of dependents claimed.
    pub dependents: u32,

    pub filing_status: FilingStatus,

    /// Federal only: qualified dividends are taxed at capital gains rates.
    pub qualified_dividends: bool,
}

impl FilerProfile {
    /// Income, gains and dividends before any jurisdiction-specific
    /// adjustment. This is the denominator of every effective rate.
    pub fn gross_income(&self) -> Decimal {
        self.income + self.capital_gains + self.dividends
    }

    /// Returns a copy with every amount scaled by `numerator / denominator`.
    ///
    /// Dependents, filing status and the qualified flag are kept as is.
    pub fn scaled(
        &self,
        numerator: u32,
        denominator: u32,
    ) -> Self {
        let numerator = Decimal::from(numerator);
        let denominator = Decimal::from(denominator);
        let scale = |amount: Decimal| {
            if denominator.is_zero() {
                Decimal::ZERO
            } else if numerator == denominator {
                amount
            } else {
                // Divide first only when the product would overflow.
                match amount.checked_mul(numerator) {
                    Some(product) => product / denominator,
                    None => amount / denominator * numerator,
                }
            }
        };

        Self {
            income: scale(self.income),
            capital_gains: scale(self.capital_gains),
            dividends: scale(self.dividends),
            ..self.clone()
        }
    }
}
