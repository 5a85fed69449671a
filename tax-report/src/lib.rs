pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod sweep;

pub use config::ReportConfig;
pub use error::ReportError;
pub use report::Report;
pub use sweep::{SweepTable, csv_file_name, sweep, write_csv};
