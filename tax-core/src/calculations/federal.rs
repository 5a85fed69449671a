//! Federal income tax.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Qualified dividends join capital gains, others join ordinary income |
//! | 2 | Gross income is frozen from the raw inputs |
//! | 3 | Ordinary income minus the standard deduction, floored at zero |
//! | 4 | Medicare levy on the result of step 3 |
//! | 5 | Ordinary schedule on the result of step 3 |
//! | 6 | Capital gains schedule on gains (plus qualified dividends) |
//! | 7 | Social Security levy on the result of step 3, up to the cap |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::FederalCalculator;
//! use tax_core::{FederalConfig, FilerProfile};
//!
//! let profile = FilerProfile {
//!     income: dec!(50000),
//!     ..Default::default()
//! };
//!
//! let outcome = FederalCalculator::new(&FederalConfig::TAX_YEAR_2022).calculate(&profile);
//!
//! assert_eq!(outcome.whole_dollars(), dec!(7074));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use super::brackets::evaluate;
use super::common::non_negative;
use crate::{FederalConfig, FilerProfile, TaxOutcome};

/// Calculator for federal income tax under a given [`FederalConfig`].
#[derive(Debug, Clone)]
pub struct FederalCalculator<'a> {
    config: &'a FederalConfig,
}

impl<'a> FederalCalculator<'a> {
    pub fn new(config: &'a FederalConfig) -> Self {
        Self { config }
    }

    /// Calculates federal tax owed and the effective rate for `profile`.
    pub fn calculate(
        &self,
        profile: &FilerProfile,
    ) -> TaxOutcome {
        let status = profile.filing_status;
        let gross_income = profile.gross_income();

        let (ordinary_income, capital_gains) = self.split_dividends(
            profile.income,
            profile.capital_gains,
            profile.dividends,
            profile.qualified_dividends,
        );

        let taxable_income = self.taxable_income(
            ordinary_income,
            Decimal::from(self.config.standard_deduction.get(status)),
        );

        let medicare = self.medicare_levy(taxable_income);
        let ordinary_tax = evaluate(taxable_income, &self.config.ordinary.get(status));
        let gains_tax = evaluate(capital_gains, &self.config.capital_gains.get(status));
        let social_security = self.social_security_levy(taxable_income);

        let tax = medicare + ordinary_tax + gains_tax + social_security;

        debug!(
            %gross_income,
            %taxable_income,
            %medicare,
            %ordinary_tax,
            %gains_tax,
            %social_security,
            "federal tax calculated"
        );

        TaxOutcome::new(tax, gross_income)
    }

    /// Routes dividends to capital gains when qualified, otherwise to
    /// ordinary income.
    fn split_dividends(
        &self,
        income: Decimal,
        capital_gains: Decimal,
        dividends: Decimal,
        qualified: bool,
    ) -> (Decimal, Decimal) {
        if qualified {
            (income, capital_gains + dividends)
        } else {
            (income + dividends, capital_gains)
        }
    }

    fn taxable_income(
        &self,
        ordinary_income: Decimal,
        standard_deduction: Decimal,
    ) -> Decimal {
        non_negative(ordinary_income - standard_deduction)
    }

    fn medicare_levy(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        taxable_income * self.config.medicare_rate
    }

    fn social_security_levy(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        let capped = taxable_income.min(Decimal::from(self.config.social_security_cap));
        capped * self.config.social_security_rate
    }
}
