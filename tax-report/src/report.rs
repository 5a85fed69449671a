//! Ranked federal and state tax report.
//!
//! ```text
//! 50-State income tax report for income of $50000
//!     State                Tax       Effective Rate
//! ==================================================
//! *   Federal              $7074     14.150%
//! ==================================================
//! 1   Hawaii               $3107     6.215%
//! ...
//! ==================================================
//! ```

use std::cmp::Reverse;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::calculations::FederalCalculator;
use tax_core::calculations::common::round_half_up;
use tax_core::{
    FederalConfig, FilerProfile, JurisdictionResult, Registry, RegistryError, TaxOutcome,
};
use tracing::{info, warn};

const SEPARATOR: &str = "==================================================";

/// Federal and state results for one filer, states ranked by descending
/// effective rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub profile: FilerProfile,
    pub federal: TaxOutcome,
    pub jurisdictions: Vec<JurisdictionResult>,
}

impl Report {
    /// Computes federal tax, hands the whole-dollar amount to every
    /// jurisdiction in `registry`, and ranks the results.
    ///
    /// Jurisdictions with equal effective rates keep their registry order.
    pub fn build(
        profile: &FilerProfile,
        federal_config: &FederalConfig,
        registry: &Registry,
    ) -> Self {
        if profile.gross_income().is_zero() {
            warn!("no gross income, every effective rate is reported as zero");
        }

        let federal = FederalCalculator::new(federal_config).calculate(profile);

        let mut jurisdictions = registry.evaluate(profile, federal.whole_dollars());
        jurisdictions.sort_by_key(|result| Reverse(result.outcome.effective_rate));

        info!(
            income = %profile.income,
            federal_tax = %federal.whole_dollars(),
            jurisdictions = jurisdictions.len(),
            "report built"
        );

        Self {
            profile: profile.clone(),
            federal,
            jurisdictions,
        }
    }

    /// Jurisdiction abbreviations in ranked order.
    pub fn abbrevs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.jurisdictions.iter().map(|result| result.abbrev)
    }

    /// Results paired with their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &JurisdictionResult)> {
        self.jurisdictions
            .iter()
            .enumerate()
            .map(|(index, result)| (index + 1, result))
    }

    /// The 1-based rank and result of the jurisdiction with `abbrev`.
    pub fn rank_of(
        &self,
        abbrev: &str,
    ) -> Result<(usize, &JurisdictionResult), RegistryError> {
        self.ranked()
            .find(|(_, result)| result.abbrev.eq_ignore_ascii_case(abbrev))
            .ok_or_else(|| RegistryError::UnknownJurisdiction(abbrev.to_string()))
    }

    /// Renders the full ranked table.
    pub fn render_table(&self) -> String {
        Table {
            report: self,
            rows: self.ranked().collect(),
        }
        .to_string()
    }

    /// Renders the table with a single jurisdiction row, keeping its rank.
    pub fn render_table_for(
        &self,
        abbrev: &str,
    ) -> Result<String, RegistryError> {
        let row = self.rank_of(abbrev)?;

        Ok(Table {
            report: self,
            rows: vec![row],
        }
        .to_string())
    }
}

/// The console layout of a report, showing the federal row and `rows`.
struct Table<'a> {
    report: &'a Report,
    rows: Vec<(usize, &'a JurisdictionResult)>,
}

impl fmt::Display for Table<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "50-State income tax report for income of ${}",
            fixed(self.report.profile.income, 0)
        )?;
        writeln!(f, "    State                Tax       Effective Rate")?;
        writeln!(f, "{SEPARATOR}")?;
        write_row(f, "*", "Federal", &self.report.federal)?;
        writeln!(f, "{SEPARATOR}")?;
        for (rank, result) in &self.rows {
            write_row(f, &rank.to_string(), result.name, &result.outcome)?;
        }
        writeln!(f, "{SEPARATOR}")
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    rank: &str,
    name: &str,
    outcome: &TaxOutcome,
) -> fmt::Result {
    writeln!(
        f,
        "{:<3} {:<20} ${:<8} {}%",
        rank,
        name,
        outcome.whole_dollars().to_string(),
        fixed(outcome.effective_rate * Decimal::ONE_HUNDRED, 3)
    )
}

/// Formats `value` rounded half away from zero to exactly `dp` decimal places.
pub(crate) fn fixed(
    value: Decimal,
    dp: u32,
) -> String {
    format!("{:.*}", dp as usize, round_half_up(value, dp))
}
