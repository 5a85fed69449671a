use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::{Bracket, BracketSchedule, ByStatus};

/// Federal income tax parameters for one tax year.
///
/// Payroll levies are modelled on taxable income after the standard
/// deduction, not on wages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FederalConfig {
    /// Flat Medicare levy on taxable ordinary income.
    pub medicare_rate: Decimal,

    /// Social Security levy on taxable ordinary income up to the cap.
    pub social_security_rate: Decimal,

    pub social_security_cap: u32,

    pub ordinary: ByStatus<BracketSchedule<'static>>,

    /// Long-term capital gains (and qualified dividends) schedule.
    pub capital_gains: ByStatus<BracketSchedule<'static>>,

    pub standard_deduction: ByStatus<u32>,
}

const ORDINARY_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.10)),
    Bracket::new(10275, dec!(0.12)),
    Bracket::new(41775, dec!(0.22)),
    Bracket::new(89075, dec!(0.24)),
    Bracket::new(170050, dec!(0.32)),
    Bracket::new(215950, dec!(0.35)),
    Bracket::new(539900, dec!(0.37)),
];

const ORDINARY_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.10)),
    Bracket::new(20550, dec!(0.12)),
    Bracket::new(83550, dec!(0.22)),
    Bracket::new(178150, dec!(0.24)),
    Bracket::new(340100, dec!(0.32)),
    Bracket::new(431900, dec!(0.35)),
    Bracket::new(647850, dec!(0.37)),
];

const GAINS_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.0)),
    Bracket::new(41675, dec!(0.15)),
    Bracket::new(459750, dec!(0.20)),
];

const GAINS_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.0)),
    Bracket::new(83350, dec!(0.15)),
    Bracket::new(517200, dec!(0.20)),
];

impl FederalConfig {
    pub const TAX_YEAR_2022: Self = Self {
        medicare_rate: dec!(0.0145),
        social_security_rate: dec!(0.062),
        social_security_cap: 147000,
        ordinary: ByStatus::new(
            BracketSchedule::new(ORDINARY_SINGLE),
            BracketSchedule::new(ORDINARY_JOINT),
        ),
        capital_gains: ByStatus::new(
            BracketSchedule::new(GAINS_SINGLE),
            BracketSchedule::new(GAINS_JOINT),
        ),
        standard_deduction: ByStatus::new(12950, 25900),
    };
}

impl Default for FederalConfig {
    fn default() -> Self {
        Self::TAX_YEAR_2022
    }
}
