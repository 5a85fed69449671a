//! Income sweeps exported to CSV.
//!
//! A sweep re-runs the report at `steps` evenly spaced fractions of the
//! filer's income, gains and dividends (`1/steps`, `2/steps`, up to the full
//! amounts) and records every effective rate.

use std::fs;
use std::path::Path;

use tax_core::calculations::FederalCalculator;
use tax_core::{FederalConfig, FilerProfile, Registry};
use tracing::{info, warn};

use crate::error::ReportError;
use crate::report::{Report, fixed};

/// Scaled copies of `profile`, one per step, ending at the full amounts.
pub fn sweep(
    profile: &FilerProfile,
    steps: u32,
) -> Result<Vec<FilerProfile>, ReportError> {
    if steps == 0 {
        warn!("refusing to sweep with zero steps");
        return Err(ReportError::InvalidSteps);
    }

    Ok((1..=steps).map(|step| profile.scaled(step, steps)).collect())
}

/// Effective rates across an income sweep, ready for CSV output.
///
/// Columns are `income`, `federal`, then one per jurisdiction in the ranked
/// order of the report the sweep was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SweepTable {
    pub fn build(
        report: &Report,
        federal_config: &FederalConfig,
        registry: &Registry,
        steps: u32,
    ) -> Result<Self, ReportError> {
        let profiles = sweep(&report.profile, steps)?;
        let columns = report
            .abbrevs()
            .map(|abbrev| registry.find(abbrev))
            .collect::<Result<Vec<_>, _>>()?;

        let header = ["income", "federal"]
            .into_iter()
            .map(str::to_string)
            .chain(columns.iter().map(|column| column.abbrev.to_string()))
            .collect();

        let calculator = FederalCalculator::new(federal_config);
        let rows = profiles
            .iter()
            .map(|profile| {
                let federal = calculator.calculate(profile);
                let federal_tax = federal.whole_dollars();

                let mut row = Vec::with_capacity(columns.len() + 2);
                row.push(fixed(profile.income, 2));
                row.push(fixed(federal.effective_rate, 6));
                row.extend(columns.iter().map(|column| {
                    let outcome = column.rule.calculate(profile, federal_tax);
                    fixed(outcome.effective_rate, 6)
                }));
                row
            })
            .collect();

        Ok(Self { header, rows })
    }
}

/// File name describing the inputs a sweep was built from, with amounts
/// rounded to whole dollars.
pub fn csv_file_name(
    profile: &FilerProfile,
    steps: u32,
) -> String {
    format!(
        "income={}_cg={}_dividends={}_qualified={}_dependents={}_mfj={}_steps={}.csv",
        fixed(profile.income, 0),
        fixed(profile.capital_gains, 0),
        fixed(profile.dividends, 0),
        profile.qualified_dividends,
        profile.dependents,
        profile.filing_status.is_joint(),
        steps
    )
}

/// Writes `table` to `path`, creating missing parent directories.
pub fn write_csv(
    path: &Path,
    table: &SweepTable,
) -> Result<(), ReportError> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_error = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(&table.header).map_err(csv_error)?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer.flush().map_err(io_error)?;

    info!(path = %path.display(), rows = table.rows.len(), "CSV sweep written");

    Ok(())
}
