use std::path::PathBuf;

use tax_core::FilerProfile;

use crate::sweep::csv_file_name;

/// Default number of income levels in a CSV sweep.
pub const DEFAULT_STEPS: u32 = 100;

/// Default directory CSV sweeps are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "output/csv";

/// Everything one run of the report needs, independent of how it was
/// collected (command line, tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub profile: FilerProfile,

    /// Write an income sweep to CSV after printing the table.
    pub csv: bool,

    pub steps: u32,
    pub output_dir: PathBuf,

    /// Print only this jurisdiction (by abbreviation) below the federal row.
    pub state: Option<String>,
}

impl ReportConfig {
    /// Where the CSV sweep for this configuration is written.
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(csv_file_name(&self.profile, self.steps))
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            profile: FilerProfile::default(),
            csv: false,
            steps: DEFAULT_STEPS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            state: None,
        }
    }
}
