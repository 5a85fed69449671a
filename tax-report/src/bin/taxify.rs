use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tax_core::{FederalConfig, FilerProfile, FilingStatus, Registry};
use tax_report::config::{DEFAULT_OUTPUT_DIR, DEFAULT_STEPS};
use tax_report::logging::init_logging;
use tax_report::{Report, ReportConfig, SweepTable, write_csv};
use tracing::debug;

/// Federal and 50-state income tax report.
///
/// Prints the federal tax and every state's tax (plus the District of
/// Columbia) for the given income, ranked by effective rate. With `--csv`,
/// also writes the effective rates across an income sweep from zero to the
/// given amounts.
#[derive(Debug, Parser)]
#[command(name = "taxify")]
#[command(version, about, long_about = None)]
struct Args {
    /// Annual ordinary income
    #[arg(long, default_value_t = Decimal::ZERO)]
    income: Decimal,

    /// Long-term capital gains
    #[arg(long, default_value_t = Decimal::ZERO)]
    cg: Decimal,

    /// Dividends and interest
    #[arg(long, default_value_t = Decimal::ZERO)]
    interest: Decimal,

    /// The dividends are qualified (federal capital gains rates)
    #[arg(long, default_value_t = false)]
    qualified: bool,

    /// Married filing jointly
    #[arg(long, default_value_t = false)]
    joint: bool,

    /// Number of dependents
    #[arg(long, default_value_t = 0)]
    dependents: u32,

    /// Write an income sweep to a CSV file
    #[arg(long, default_value_t = false)]
    csv: bool,

    /// Number of income levels between zero and the given income in the CSV
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: u32,

    /// Directory the CSV file is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Only show this state (two-letter abbreviation, e.g. NY)
    #[arg(long)]
    state: Option<String>,

    /// Log filter, overriding RUST_LOG (e.g. debug, tax_core=trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> ReportConfig {
        ReportConfig {
            profile: FilerProfile {
                income: self.income,
                capital_gains: self.cg,
                dividends: self.interest,
                dependents: self.dependents,
                filing_status: FilingStatus::from_joint(self.joint),
                qualified_dividends: self.qualified,
            },
            csv: self.csv,
            steps: self.steps,
            output_dir: self.output_dir,
            state: self.state,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log_level.as_deref(), args.log_file.as_deref())?;

    let config = args.into_config();
    debug!(?config, "configuration loaded");

    let federal_config = FederalConfig::default();
    let registry = Registry::standard();

    let report = Report::build(&config.profile, &federal_config, &registry);

    let table = match &config.state {
        Some(state) => report
            .render_table_for(state)
            .with_context(|| format!("Cannot show state: {state}"))?,
        None => report.render_table(),
    };
    print!("{table}");

    if config.csv {
        let path = config.csv_path();

        let sweep = SweepTable::build(&report, &federal_config, &registry, config.steps)
            .context("Failed to build income sweep")?;
        write_csv(&path, &sweep)
            .with_context(|| format!("Failed to write CSV: {}", path.display()))?;
    }

    Ok(())
}
