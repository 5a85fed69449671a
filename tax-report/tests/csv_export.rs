//! End-to-end tests for the report and CSV sweep, writing to a scratch
//! directory.

use std::fs;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::{FederalConfig, FilerProfile, Registry};
use tax_report::{Report, ReportConfig, ReportError, SweepTable, write_csv};
use tempfile::TempDir;

fn build(config: &ReportConfig) -> Result<SweepTable, ReportError> {
    let registry = Registry::standard();
    let report = Report::build(&config.profile, &FederalConfig::TAX_YEAR_2022, &registry);

    SweepTable::build(&report, &FederalConfig::TAX_YEAR_2022, &registry, config.steps)
}

#[test]
fn four_step_sweep_writes_header_and_four_rows() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig {
        profile: FilerProfile {
            income: dec!(100000),
            ..Default::default()
        },
        steps: 4,
        output_dir: dir.path().join("output").join("csv"),
        ..Default::default()
    };

    let path = config.csv_path();
    write_csv(&path, &build(&config).unwrap()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    let incomes: Vec<&str> = lines[1..]
        .iter()
        .map(|line| line.split(',').next().unwrap())
        .collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("income,federal,"));
    assert_eq!(lines[0].split(',').count(), 53);
    assert_eq!(incomes, vec!["25000.00", "50000.00", "75000.00", "100000.00"]);
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "income=100000_cg=0_dividends=0_qualified=false_dependents=0_mfj=false_steps=4.csv"
    );
}

#[test]
fn rates_have_six_decimals() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig {
        profile: FilerProfile {
            income: dec!(45000),
            dividends: dec!(3000),
            ..Default::default()
        },
        steps: 2,
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let path = config.csv_path();
    write_csv(&path, &build(&config).unwrap()).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    for record in reader.records() {
        let record = record.unwrap();
        for rate in record.iter().skip(1) {
            let (_, decimals) = rate.split_once('.').unwrap();
            assert_eq!(decimals.len(), 6, "{rate}");
        }
    }
}

#[test]
fn unwritable_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let config = ReportConfig {
        profile: FilerProfile {
            income: dec!(10000),
            ..Default::default()
        },
        steps: 1,
        output_dir: blocker.join("csv"),
        ..Default::default()
    };

    let err = write_csv(&config.csv_path(), &build(&config).unwrap()).unwrap_err();

    assert!(matches!(err, ReportError::Io { .. }));
}

#[test]
fn zero_steps_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig {
        profile: FilerProfile {
            income: dec!(10000),
            ..Default::default()
        },
        steps: 0,
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    assert!(matches!(build(&config), Err(ReportError::InvalidSteps)));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn full_report_ranks_all_jurisdictions() {
    let profile = FilerProfile {
        income: dec!(50000),
        ..Default::default()
    };

    let report = Report::build(
        &profile,
        &FederalConfig::TAX_YEAR_2022,
        &Registry::standard(),
    );
    let table = report.render_table();

    assert_eq!(report.jurisdictions.len(), 51);
    assert!(
        report
            .jurisdictions
            .windows(2)
            .all(|pair| pair[0].outcome.effective_rate >= pair[1].outcome.effective_rate)
    );
    // title, header, three separators, federal row and 51 ranked rows after a blank line
    assert_eq!(table.lines().count(), 58);
    assert!(table.contains("51  "));
}
