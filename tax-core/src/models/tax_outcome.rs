use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::effective_rate;

/// The result of applying one tax rule to one filer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxOutcome {
    /// Tax owed, unrounded.
    pub tax: Decimal,

    /// `tax / gross income`, or zero when there is no gross income.
    pub effective_rate: Decimal,
}

impl TaxOutcome {
    pub const ZERO: Self = Self {
        tax: Decimal::ZERO,
        effective_rate: Decimal::ZERO,
    };

    pub fn new(
        tax: Decimal,
        gross_income: Decimal,
    ) -> Self {
        Self {
            tax,
            effective_rate: effective_rate(tax, gross_income),
        }
    }

    /// Tax owed floored to whole dollars.
    pub fn whole_dollars(&self) -> Decimal {
        self.tax.floor().normalize()
    }
}
