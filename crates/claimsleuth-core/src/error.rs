/// Error types for claim loading and report export.
///
/// Loading never produces a partial table: the first bad row aborts the
/// whole load and is reported here with its 1-based data row number.
use std::path::PathBuf;

/// Errors raised while turning CSV input into a [`crate::ClaimTable`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),

    #[error("row {row}: '{value}' is not a valid {column} value")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: '{value}' is not a recognised {column} date")]
    InvalidDate {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Errors raised while saving a generated report.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no report has been generated yet")]
    NothingToExport,

    #[error("could not write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
