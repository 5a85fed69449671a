use std::path::PathBuf;

use tax_core::RegistryError;
use thiserror::Error;

/// Errors that can occur while building or exporting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("number of sweep steps must be at least 1")]
    InvalidSteps,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
