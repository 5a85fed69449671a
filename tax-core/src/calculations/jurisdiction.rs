//! State income tax engine.
//!
//! Every bracket-based jurisdiction goes through [`JurisdictionWorksheet`]:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Start from ordinary income, no tax |
//! | 2 | Fold in capital gains per its [`IncomeTreatment`] |
//! | 3 | Fold in dividends per its [`IncomeTreatment`] |
//! | 4 | Freeze gross income from the raw inputs |
//! | 5 | Dependent exemption, as deduction or credit |
//! | 6 | Standard deduction, as deduction or credit |
//! | 7 | Personal exemption, as deduction or credit |
//! | 8 | Deductible federal tax, if allowed |
//! | 9 | Capital gains deduction, if any |
//! | 10 | Floor taxable income at zero and apply the brackets |
//! | 11 | Floor the tax at zero (credits never become a refund) |

use rust_decimal::Decimal;
use tracing::debug;

use super::brackets::evaluate;
use super::common::non_negative;
use crate::{
    FilerProfile, FlatTaxConfig, IncomeTreatment, JurisdictionConfig, JurisdictionRule, Relief,
    TaxOutcome,
};

impl JurisdictionRule {
    /// Calculates the state tax owed by `profile`.
    ///
    /// `federal_tax` is the federal tax owed in whole dollars; only
    /// jurisdictions with a federal deduction look at it.
    pub fn calculate(
        &self,
        profile: &FilerProfile,
        federal_tax: Decimal,
    ) -> TaxOutcome {
        match self {
            Self::NoTax => TaxOutcome::ZERO,
            Self::Standard(config) => {
                JurisdictionWorksheet::new(config).calculate(profile, federal_tax)
            }
            Self::CreditBased(config) => {
                let credited = JurisdictionConfig {
                    dependent_relief: Relief::Credit,
                    standard_deduction_relief: Relief::Credit,
                    ..*config
                };
                JurisdictionWorksheet::new(&credited).calculate(profile, federal_tax)
            }
            Self::DividendOnly(flat) => flat_tax(flat, profile.dividends, profile),
            Self::CapitalGainsOnly(flat) => flat_tax(flat, profile.capital_gains, profile),
        }
    }
}

/// Flat rate on one category of income above an exemption.
fn flat_tax(
    config: &FlatTaxConfig,
    taxed_amount: Decimal,
    profile: &FilerProfile,
) -> TaxOutcome {
    let exemption = Decimal::from(config.exemption.get(profile.filing_status));
    let taxable = non_negative(taxed_amount - exemption);
    let tax = taxable * config.rate;

    debug!(%taxed_amount, %taxable, %tax, "flat tax calculated");

    TaxOutcome::new(tax, profile.gross_income())
}

/// Running totals while a worksheet is filled in. Either side may go
/// negative until the final clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ledger {
    taxable_income: Decimal,
    tax: Decimal,
}

impl Ledger {
    fn new(income: Decimal) -> Self {
        Self {
            taxable_income: income,
            tax: Decimal::ZERO,
        }
    }

    fn include(
        &mut self,
        treatment: IncomeTreatment,
        amount: Decimal,
    ) {
        match treatment {
            IncomeTreatment::Ordinary => self.taxable_income += amount,
            IncomeTreatment::PartialInclusion(fraction) => self.taxable_income += amount * fraction,
            IncomeTreatment::FlatRate(rate) => self.tax += amount * rate,
        }
    }

    fn relieve(
        &mut self,
        relief: Relief,
        amount: Decimal,
    ) {
        match relief {
            Relief::Deduction => self.taxable_income -= amount,
            Relief::Credit => self.tax -= amount,
        }
    }
}

/// Calculator for a bracket-based jurisdiction.
#[derive(Debug, Clone)]
pub struct JurisdictionWorksheet<'a> {
    config: &'a JurisdictionConfig,
}

impl<'a> JurisdictionWorksheet<'a> {
    pub fn new(config: &'a JurisdictionConfig) -> Self {
        Self { config }
    }

    pub fn calculate(
        &self,
        profile: &FilerProfile,
        federal_tax: Decimal,
    ) -> TaxOutcome {
        let config = self.config;
        let status = profile.filing_status;

        let mut ledger = Ledger::new(profile.income);
        ledger.include(config.capital_gains, profile.capital_gains);
        ledger.include(config.dividends, profile.dividends);

        let gross_income = profile.gross_income();

        ledger.relieve(
            config.dependent_relief,
            Decimal::from(profile.dependents) * Decimal::from(config.dependent_exemption),
        );
        ledger.relieve(
            config.standard_deduction_relief,
            Decimal::from(config.standard_deduction.get(status)),
        );
        ledger.relieve(
            config.exemption_relief,
            Decimal::from(config.personal_exemption.get(status)),
        );

        ledger.taxable_income -= config.federal_deduction.allowance(federal_tax, status);

        if let Some(deduction) = config.gains_deduction {
            ledger.taxable_income -= deduction.amount(profile.capital_gains);
        }

        let taxable_income = non_negative(ledger.taxable_income);
        let bracket_tax = evaluate(taxable_income, &config.brackets.get(status));
        let tax = non_negative(ledger.tax + bracket_tax);

        debug!(
            %gross_income,
            %taxable_income,
            %bracket_tax,
            adjustments = %ledger.tax,
            %tax,
            "jurisdiction tax calculated"
        );

        TaxOutcome::new(tax, gross_income)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{Bracket, BracketSchedule, ByStatus, FederalDeduction, FilingStatus};

    const TIERED: &[Bracket] = &[
        Bracket::new(0, dec!(0.02)),
        Bracket::new(500, dec!(0.03)),
        Bracket::new(3000, dec!(0.05)),
    ];

    const FLAT_FIVE: &[Bracket] = &[Bracket::new(0, dec!(0.05))];

    fn tiered() -> JurisdictionConfig {
        JurisdictionConfig::new(ByStatus::same(BracketSchedule::new(TIERED)))
            .standard_deduction(2500, 7500)
            .personal_exemption(1500, 3000)
            .dependent_exemption(1000)
    }

    fn flat() -> JurisdictionConfig {
        JurisdictionConfig::new(ByStatus::same(BracketSchedule::new(FLAT_FIVE)))
    }

    fn wages(income: Decimal) -> FilerProfile {
        FilerProfile {
            income,
            ..Default::default()
        }
    }

    fn standard_tax(
        config: JurisdictionConfig,
        profile: &FilerProfile,
    ) -> TaxOutcome {
        JurisdictionRule::Standard(config).calculate(profile, Decimal::ZERO)
    }

    #[test]
    fn deductions_reduce_taxable_income() {
        let outcome = standard_tax(tiered(), &wages(dec!(10000)));

        assert_eq!(outcome.tax, dec!(235));
        assert_eq!(outcome.effective_rate, dec!(0.0235));
    }

    #[test]
    fn dependents_deducted_per_head() {
        let profile = FilerProfile {
            dependents: 2,
            ..wages(dec!(10000))
        };

        // taxable 4000
        let outcome = standard_tax(tiered(), &profile);

        assert_eq!(outcome.tax, dec!(135));
    }

    #[test]
    fn credits_reduce_tax_directly() {
        let config = flat()
            .personal_exemption(100, 200)
            .exemption_credit()
            .dependent_exemption(50)
            .dependent_credit();
        let profile = FilerProfile {
            dependents: 1,
            ..wages(dec!(10000))
        };

        let outcome = standard_tax(config, &profile);

        assert_eq!(outcome.tax, dec!(350));
    }

    #[test]
    fn credits_never_produce_refund() {
        let config = flat().dependent_exemption(400).dependent_credit();
        let profile = FilerProfile {
            dependents: 3,
            ..wages(dec!(1000))
        };

        let outcome = standard_tax(config, &profile);

        assert_eq!(outcome, TaxOutcome::new(Decimal::ZERO, dec!(1000)));
    }

    #[test]
    fn partial_inclusion_adds_share_of_gains() {
        let config = flat().capital_gains(IncomeTreatment::PartialInclusion(dec!(0.5)));
        let profile = FilerProfile {
            capital_gains: dec!(10000),
            ..wages(dec!(10000))
        };

        let outcome = standard_tax(config, &profile);

        assert_eq!(outcome.tax, dec!(750));
        // gross income still counts every dollar of gains
        assert_eq!(outcome.effective_rate, dec!(0.0375));
    }

    #[test]
    fn flat_rate_gains_skip_brackets_and_deductions() {
        let config = flat()
            .personal_exemption(15000, 24000)
            .capital_gains(IncomeTreatment::FlatRate(dec!(0.07)));
        let profile = FilerProfile {
            capital_gains: dec!(10000),
            ..wages(dec!(10000))
        };

        let outcome = standard_tax(config, &profile);

        assert_eq!(outcome.tax, dec!(700));
        assert_eq!(outcome.effective_rate, dec!(0.035));
    }

    #[test]
    fn flat_rate_dividends_configured_independently() {
        let config = flat().dividends(IncomeTreatment::FlatRate(dec!(0.1)));
        let profile = FilerProfile {
            capital_gains: dec!(1000),
            dividends: dec!(1000),
            ..Default::default()
        };

        let outcome = standard_tax(config, &profile);

        assert_eq!(outcome.tax, dec!(150));
    }

    #[test]
    fn capped_federal_deduction() {
        let cap = FederalDeduction::Capped(ByStatus::new(5000, 10000));
        let rule = JurisdictionRule::Standard(flat().federal_deduction(cap));
        let profile = wages(dec!(100000));
        let joint_profile = FilerProfile {
            filing_status: FilingStatus::MarriedFilingJointly,
            ..profile.clone()
        };

        let single = rule.calculate(&profile, dec!(8000));
        let joint = rule.calculate(&joint_profile, dec!(8000));

        assert_eq!(single.tax, dec!(4750));
        assert_eq!(joint.tax, dec!(4600));
    }

    #[test]
    fn unlimited_federal_deduction() {
        let config = flat().federal_deduction(FederalDeduction::Unlimited);
        let rule = JurisdictionRule::Standard(config);

        let outcome = rule.calculate(&wages(dec!(100000)), dec!(30000));

        assert_eq!(outcome.tax, dec!(3500));
    }

    #[test]
    fn gains_deduction_applies_minimum_without_gains() {
        let config = flat().gains_deduction(1000, dec!(0.4));

        let outcome = standard_tax(config, &wages(dec!(10000)));

        assert_eq!(outcome.tax, dec!(450));
    }

    #[test]
    fn gains_deduction_uses_share_of_large_gains() {
        let config = flat().gains_deduction(1000, dec!(0.4));
        let profile = FilerProfile {
            capital_gains: dec!(10000),
            ..Default::default()
        };

        let outcome = standard_tax(config, &profile);

        assert_eq!(outcome.tax, dec!(300));
    }

    #[test]
    fn credit_based_rule_turns_standard_deduction_into_credit() {
        let config = flat().standard_deduction(777, 1554).dependent_exemption(1750);
        let profile = FilerProfile {
            dependents: 1,
            ..wages(dec!(100000))
        };

        let standard = standard_tax(config, &profile);
        let rule = JurisdictionRule::CreditBased(config);
        let credit_based = rule.calculate(&profile, Decimal::ZERO);

        // 97473 * 5%
        assert_eq!(standard.tax, dec!(4873.65));
        // 5000 - 777 - 1750
        assert_eq!(credit_based.tax, dec!(2473));
    }

    #[test]
    fn no_tax_rule_ignores_income() {
        let profile = FilerProfile {
            capital_gains: dec!(1000000),
            dividends: dec!(1000000),
            ..wages(dec!(1000000))
        };

        assert_eq!(
            JurisdictionRule::NoTax.calculate(&profile, dec!(500000)),
            TaxOutcome::ZERO
        );
    }

    #[test]
    fn dividend_only_rule_taxes_dividends_above_exemption() {
        let rule = JurisdictionRule::DividendOnly(FlatTaxConfig {
            rate: dec!(0.05),
            exemption: ByStatus::new(2400, 4800),
        });
        let profile = FilerProfile {
            dividends: dec!(12400),
            ..wages(dec!(87600))
        };

        let outcome = rule.calculate(&profile, Decimal::ZERO);

        assert_eq!(outcome.tax, dec!(500));
        assert_eq!(outcome.effective_rate, dec!(0.005));
    }

    #[test]
    fn capital_gains_only_rule_taxes_gains_above_exemption() {
        let rule = JurisdictionRule::CapitalGainsOnly(FlatTaxConfig {
            rate: dec!(0.07),
            exemption: ByStatus::same(250000),
        });
        let profile = FilerProfile {
            capital_gains: dec!(350000),
            ..wages(dec!(50000))
        };

        let outcome = rule.calculate(&profile, Decimal::ZERO);

        assert_eq!(outcome.tax, dec!(7000));
        assert_eq!(outcome.effective_rate, dec!(0.0175));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let rule = JurisdictionRule::Standard(tiered());
        let profile = wages(dec!(73512.34));

        assert_eq!(
            rule.calculate(&profile, dec!(9000)),
            rule.calculate(&profile, dec!(9000))
        );
    }
}
