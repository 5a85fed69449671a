//! Configuration records describing how each state taxes a filer.
//!
//! Most jurisdictions fit [`JurisdictionConfig`] and are evaluated by the
//! same engine. The few that do not (no income tax, dividend-only,
//! gains-only, credit-based deductions) get their own [`JurisdictionRule`]
//! variant.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{BracketSchedule, ByStatus, FilingStatus};

/// How a category of income (capital gains or dividends) reaches the tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IncomeTreatment {
    /// Added in full to taxable income.
    Ordinary,

    /// Taxed at its own flat rate, added straight to the tax owed.
    FlatRate(Decimal),

    /// Only this fraction is added to taxable income.
    PartialInclusion(Decimal),
}

/// Whether an allowance reduces taxable income or the tax itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Relief {
    #[default]
    Deduction,
    Credit,
}

/// How much federal income tax may be subtracted from state taxable income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FederalDeduction {
    #[default]
    None,
    Unlimited,
    Capped(ByStatus<u32>),
}

impl FederalDeduction {
    /// The deductible portion of `federal_tax`.
    pub fn allowance(
        &self,
        federal_tax: Decimal,
        status: FilingStatus,
    ) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Unlimited => federal_tax,
            Self::Capped(cap) => federal_tax.min(Decimal::from(cap.get(status))),
        }
    }
}

/// Deduction of the greater of a fixed amount or a share of capital gains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GainsDeduction {
    pub minimum: u32,
    pub fraction: Decimal,
}

impl GainsDeduction {
    pub fn amount(
        &self,
        capital_gains: Decimal,
    ) -> Decimal {
        Decimal::from(self.minimum).max(capital_gains * self.fraction)
    }
}

/// Parameters of a bracket-based state income tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JurisdictionConfig {
    pub brackets: ByStatus<BracketSchedule<'static>>,
    pub standard_deduction: ByStatus<u32>,
    pub personal_exemption: ByStatus<u32>,

    /// Allowance per dependent, the same for both filing statuses.
    pub dependent_exemption: u32,

    pub dependent_relief: Relief,
    pub standard_deduction_relief: Relief,
    pub exemption_relief: Relief,

    pub capital_gains: IncomeTreatment,
    pub dividends: IncomeTreatment,

    pub federal_deduction: FederalDeduction,
    pub gains_deduction: Option<GainsDeduction>,
}

impl JurisdictionConfig {
    /// A schedule with no allowances, taxing everything as ordinary income.
    pub const fn new(brackets: ByStatus<BracketSchedule<'static>>) -> Self {
        Self {
            brackets,
            standard_deduction: ByStatus::same(0),
            personal_exemption: ByStatus::same(0),
            dependent_exemption: 0,
            dependent_relief: Relief::Deduction,
            standard_deduction_relief: Relief::Deduction,
            exemption_relief: Relief::Deduction,
            capital_gains: IncomeTreatment::Ordinary,
            dividends: IncomeTreatment::Ordinary,
            federal_deduction: FederalDeduction::None,
            gains_deduction: None,
        }
    }

    pub const fn standard_deduction(
        mut self,
        single: u32,
        joint: u32,
    ) -> Self {
        self.standard_deduction = ByStatus::new(single, joint);
        self
    }

    pub const fn personal_exemption(
        mut self,
        single: u32,
        joint: u32,
    ) -> Self {
        self.personal_exemption = ByStatus::new(single, joint);
        self
    }

    pub const fn dependent_exemption(
        mut self,
        amount: u32,
    ) -> Self {
        self.dependent_exemption = amount;
        self
    }

    pub const fn dependent_credit(mut self) -> Self {
        self.dependent_relief = Relief::Credit;
        self
    }

    pub const fn exemption_credit(mut self) -> Self {
        self.exemption_relief = Relief::Credit;
        self
    }

    pub const fn capital_gains(
        mut self,
        treatment: IncomeTreatment,
    ) -> Self {
        self.capital_gains = treatment;
        self
    }

    pub const fn dividends(
        mut self,
        treatment: IncomeTreatment,
    ) -> Self {
        self.dividends = treatment;
        self
    }

    pub const fn federal_deduction(
        mut self,
        deduction: FederalDeduction,
    ) -> Self {
        self.federal_deduction = deduction;
        self
    }

    pub const fn gains_deduction(
        mut self,
        minimum: u32,
        fraction: Decimal,
    ) -> Self {
        self.gains_deduction = Some(GainsDeduction { minimum, fraction });
        self
    }

    /// Every bracket schedule this configuration can select.
    pub fn schedules(&self) -> [BracketSchedule<'static>; 2] {
        [self.brackets.single, self.brackets.joint]
    }
}

/// A flat tax on a single category of income above an exemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlatTaxConfig {
    pub rate: Decimal,
    pub exemption: ByStatus<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JurisdictionRule {
    Standard(JurisdictionConfig),

    /// No income tax of any kind.
    NoTax,

    /// Only dividends and interest are taxed.
    DividendOnly(FlatTaxConfig),

    /// Only capital gains are taxed.
    CapitalGainsOnly(FlatTaxConfig),

    /// The standard deduction and dependent exemption are credits against
    /// the tax rather than deductions from income.
    CreditBased(JurisdictionConfig),
}

/// A row of the jurisdiction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Jurisdiction {
    pub name: &'static str,
    pub abbrev: &'static str,
    pub rule: JurisdictionRule,
}

impl Jurisdiction {
    pub const fn new(
        name: &'static str,
        abbrev: &'static str,
        rule: JurisdictionRule,
    ) -> Self {
        Self { name, abbrev, rule }
    }
}
