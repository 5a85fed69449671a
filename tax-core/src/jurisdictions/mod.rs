//! Registry of state income tax rules.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//! use tax_core::{FilerProfile, Registry};
//!
//! let registry = Registry::standard();
//! let profile = FilerProfile {
//!     income: dec!(10000),
//!     ..Default::default()
//! };
//!
//! let alabama = registry.find("al").unwrap();
//! let outcome = alabama.rule.calculate(&profile, Decimal::ZERO);
//!
//! assert_eq!(registry.len(), 51);
//! assert_eq!(outcome.whole_dollars(), dec!(235));
//! ```

mod table;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{FilerProfile, Jurisdiction, TaxOutcome};

pub use table::JURISDICTIONS;

/// Errors raised when looking up a jurisdiction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No jurisdiction uses the given abbreviation.
    #[error("unknown jurisdiction: {0}")]
    UnknownJurisdiction(String),
}

/// One jurisdiction's result for a single filer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JurisdictionResult {
    pub name: &'static str,
    pub abbrev: &'static str,
    pub outcome: TaxOutcome,
}

/// An ordered, read-only collection of jurisdictions.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    jurisdictions: &'static [Jurisdiction],
}

impl Registry {
    pub const fn new(jurisdictions: &'static [Jurisdiction]) -> Self {
        Self { jurisdictions }
    }

    /// All 50 states and the District of Columbia.
    pub const fn standard() -> Self {
        Self::new(&JURISDICTIONS)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Jurisdiction> {
        self.jurisdictions.iter()
    }

    pub fn len(&self) -> usize {
        self.jurisdictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jurisdictions.is_empty()
    }

    /// Looks a jurisdiction up by its abbreviation, ignoring case.
    pub fn find(
        &self,
        abbrev: &str,
    ) -> Result<&'static Jurisdiction, RegistryError> {
        self.iter()
            .find(|jurisdiction| jurisdiction.abbrev.eq_ignore_ascii_case(abbrev))
            .ok_or_else(|| RegistryError::UnknownJurisdiction(abbrev.to_string()))
    }

    /// Evaluates every jurisdiction for `profile`, in registry order.
    ///
    /// `federal_tax` is the federal tax owed in whole dollars.
    pub fn evaluate(
        &self,
        profile: &FilerProfile,
        federal_tax: Decimal,
    ) -> Vec<JurisdictionResult> {
        self.iter()
            .map(|jurisdiction| {
                let outcome = jurisdiction.rule.calculate(profile, federal_tax);
                debug!(
                    jurisdiction = jurisdiction.abbrev,
                    tax = %outcome.tax,
                    effective_rate = %outcome.effective_rate,
                    "jurisdiction evaluated"
                );

                JurisdictionResult {
                    name: jurisdiction.name,
                    abbrev: jurisdiction.abbrev,
                    outcome,
                }
            })
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
