use std::collections::HashSet;

use pretty_assertions::assert_eq;
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_core::calculations::FederalCalculator;
use tax_core::{FederalConfig, FilerProfile, FilingStatus, JurisdictionRule, Registry, TaxOutcome};

const NO_TAX_STATES: [&str; 7] = ["AK", "FL", "NV", "SD", "TN", "TX", "WY"];

fn wages(income: Decimal) -> FilerProfile {
    FilerProfile {
        income,
        ..Default::default()
    }
}

/// Runs the federal rule and hands its whole-dollar tax to `abbrev`.
fn state_tax(
    abbrev: &str,
    profile: &FilerProfile,
) -> TaxOutcome {
    let calculator = FederalCalculator::new(&FederalConfig::TAX_YEAR_2022);
    let federal = calculator.calculate(profile);
    let jurisdiction = Registry::standard().find(abbrev).unwrap();

    jurisdiction.rule.calculate(profile, federal.whole_dollars())
}

/// Tax owed to `abbrev` when the federal tax is fixed by the caller.
fn rule_tax(
    abbrev: &str,
    profile: &FilerProfile,
    federal_tax: Decimal,
) -> Decimal {
    let jurisdiction = Registry::standard().find(abbrev).unwrap();

    jurisdiction.rule.calculate(profile, federal_tax).tax
}

fn joint(profile: FilerProfile) -> FilerProfile {
    FilerProfile {
        filing_status: FilingStatus::MarriedFilingJointly,
        ..profile
    }
}

fn with_gains(
    income: Decimal,
    capital_gains: Decimal,
) -> FilerProfile {
    FilerProfile {
        capital_gains,
        ..wages(income)
    }
}

#[test]
fn registry_holds_fifty_states_and_dc() {
    let registry = Registry::standard();
    let abbrevs: HashSet<&str> = registry.iter().map(|j| j.abbrev).collect();

    assert_eq!(registry.len(), 51);
    assert_eq!(abbrevs.len(), 51);
    assert!(abbrevs.contains("DC"));
}

#[test]
fn every_bracket_schedule_is_valid() {
    for jurisdiction in Registry::standard().iter() {
        let config = match &jurisdiction.rule {
            JurisdictionRule::Standard(config) | JurisdictionRule::CreditBased(config) => config,
            _ => continue,
        };

        for schedule in config.schedules() {
            assert_eq!(schedule.validate(), Ok(()), "{}", jurisdiction.name);
        }
    }
}

#[test]
fn alabama_single_filer() {
    let outcome = state_tax("AL", &wages(dec!(10000)));

    assert_eq!(outcome.whole_dollars(), dec!(235));
    assert_eq!(outcome.effective_rate, dec!(0.0235));
}

#[test]
fn texas_levies_nothing() {
    assert_eq!(state_tax("TX", &wages(dec!(50000))), TaxOutcome::ZERO);
}

#[test]
fn no_tax_states_ignore_every_kind_of_income() {
    let profile = FilerProfile {
        income: dec!(250000),
        capital_gains: dec!(80000),
        dividends: dec!(20000),
        dependents: 2,
        filing_status: FilingStatus::MarriedFilingJointly,
        qualified_dividends: true,
    };

    for abbrev in NO_TAX_STATES {
        assert_eq!(state_tax(abbrev, &profile), TaxOutcome::ZERO, "{abbrev}");
    }
}

#[test]
fn missouri_caps_deductible_federal_tax() {
    // federal tax 7074 is capped at 5000: taxable 32050
    let outcome = state_tax("MO", &wages(dec!(50000)));

    assert_eq!(outcome.tax, dec!(1541.944));
}

#[test]
fn pennsylvania_flat_rate_without_relief() {
    let profile = FilerProfile {
        dependents: 3,
        ..wages(dec!(50000))
    };

    assert_eq!(state_tax("PA", &profile).tax, dec!(1535));
}

#[test]
fn colorado_flat_rate_after_standard_deduction() {
    assert_eq!(state_tax("CO", &wages(dec!(50000))).tax, dec!(1685.775));
}

#[test]
fn utah_credits_reduce_tax() {
    let profile = FilerProfile {
        dependents: 1,
        ..wages(dec!(50000))
    };

    // 2475 - 777 - 1750 would be negative
    assert_eq!(state_tax("UT", &profile).tax, Decimal::ZERO);
    assert_eq!(state_tax("UT", &wages(dec!(100000))).tax, dec!(4173));
}

#[test]
fn washington_taxes_only_large_gains() {
    let modest = FilerProfile {
        capital_gains: dec!(200000),
        ..wages(dec!(500000))
    };
    let large = FilerProfile {
        capital_gains: dec!(300000),
        ..wages(dec!(100000))
    };

    assert_eq!(state_tax("WA", &modest), TaxOutcome::ZERO);
    assert_eq!(state_tax("WA", &large).tax, dec!(3500));
}

#[test]
fn montana_caps_federal_deduction_by_filing_status() {
    // single: cap 5000 binds, taxable 37590
    assert_eq!(rule_tax("MT", &wages(dec!(50000)), dec!(8000)), dec!(1966.325));
    // joint: cap 10000 binds, taxable 25180
    assert_eq!(
        rule_tax("MT", &joint(wages(dec!(50000))), dec!(12000)),
        dec!(1128.65)
    );
}

#[test]
fn oregon_caps_federal_deduction_and_credits_exemption() {
    // taxable 90630 single, 88210 joint, less the 219/436 exemption credit
    assert_eq!(rule_tax("OR", &wages(dec!(100000)), dec!(10000)), dec!(7454.125));
    assert_eq!(
        rule_tax("OR", &joint(wages(dec!(100000))), dec!(10000)),
        dec!(6768.375)
    );
}

#[test]
fn iowa_deducts_all_federal_tax() {
    assert_eq!(rule_tax("IA", &wages(dec!(50000)), dec!(5000)), dec!(2020.4904));
    assert_eq!(rule_tax("IA", &wages(dec!(50000)), dec!(20000)), dec!(1103.4934));
}

#[test]
fn new_hampshire_exempts_dividends_by_filing_status() {
    let profile = FilerProfile {
        dividends: dec!(10000),
        ..wages(dec!(50000))
    };

    assert_eq!(rule_tax("NH", &profile, Decimal::ZERO), dec!(380));
    assert_eq!(rule_tax("NH", &joint(profile), Decimal::ZERO), dec!(260));
}

#[test]
fn partial_gains_inclusion_rates() {
    let cases = [
        ("AR", dec!(20000), dec!(1011.5)),
        ("ND", dec!(50000), dec!(497.285)),
        ("SC", dec!(40000), dec!(1740.6)),
    ];

    for (abbrev, income, expected) in cases {
        let profile = with_gains(income, dec!(10000));

        assert_eq!(rule_tax(abbrev, &profile, Decimal::ZERO), expected, "{abbrev}");
    }
}

#[test]
fn flat_rate_gains_rates() {
    let profile = with_gains(dec!(50000), dec!(10000));

    // brackets on 35000 plus 700
    assert_eq!(rule_tax("CT", &profile, Decimal::ZERO), dec!(2250));
    // brackets on 46656 plus 725
    assert_eq!(rule_tax("HI", &profile, Decimal::ZERO), dec!(3832.424));
}

#[test]
fn new_mexico_gains_deduction() {
    // deducts 4000 of the gains
    let profile = with_gains(dec!(50000), dec!(10000));
    assert_eq!(rule_tax("NM", &profile, Decimal::ZERO), dec!(1829.95));
    // deducts the 1000 minimum
    assert_eq!(rule_tax("NM", &wages(dec!(50000)), Decimal::ZERO), dec!(1486.95));
}

#[test]
fn schedules_starting_above_zero() {
    // Ohio taxes nothing below 25000 after its exemption
    assert_eq!(rule_tax("OH", &wages(dec!(20000)), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(rule_tax("OH", &wages(dec!(30000)), Decimal::ZERO), dec!(71.89));
    assert_eq!(rule_tax("DE", &wages(dec!(30000)), Decimal::ZERO), dec!(988.125));
    assert_eq!(rule_tax("MS", &wages(dec!(30000)), Decimal::ZERO), dec!(785));
}

#[test]
fn joint_filers_pay_less_than_single_on_same_income() {
    let single = wages(dec!(120000));
    let joint = FilerProfile {
        filing_status: FilingStatus::MarriedFilingJointly,
        ..single.clone()
    };

    for abbrev in ["CA", "NY", "GA", "OR", "DC"] {
        assert!(
            state_tax(abbrev, &joint).tax < state_tax(abbrev, &single).tax,
            "{abbrev}"
        );
    }
}

#[test]
fn zero_income_gives_zero_everywhere() {
    let profile = FilerProfile::default();

    for jurisdiction in Registry::standard().iter() {
        assert_eq!(
            jurisdiction.rule.calculate(&profile, Decimal::ZERO),
            TaxOutcome::ZERO,
            "{}",
            jurisdiction.name
        );
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(48))]

    #[test]
    fn tax_is_never_negative(
        income in 0u32..2_000_000,
        gains in 0u32..500_000,
        dividends in 0u32..100_000,
        dependents in 0u32..12,
        joint: bool,
    ) {
        let profile = FilerProfile {
            income: Decimal::from(income),
            capital_gains: Decimal::from(gains),
            dividends: Decimal::from(dividends),
            dependents,
            filing_status: FilingStatus::from_joint(joint),
            qualified_dividends: false,
        };

        for result in Registry::standard().evaluate(&profile, Decimal::from(income / 5)) {
            prop_assert!(result.outcome.tax >= Decimal::ZERO, "{}", result.name);
            prop_assert!(result.outcome.effective_rate >= Decimal::ZERO, "{}", result.name);
        }
    }

    #[test]
    fn evaluation_is_repeatable(
        income in 0u32..1_000_000,
        dependents in 0u32..6,
        joint: bool,
    ) {
        let profile = FilerProfile {
            income: Decimal::from(income),
            dependents,
            filing_status: FilingStatus::from_joint(joint),
            ..Default::default()
        };
        let registry = Registry::standard();

        prop_assert_eq!(
            registry.evaluate(&profile, Decimal::ZERO),
            registry.evaluate(&profile, Decimal::ZERO)
        );
    }
}
