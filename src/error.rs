use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading the measurement CSV files.
///
/// Every variant is fatal for a run: loading happens before the report is
/// printed, so no partial output is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no '{column}' column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{} row {row}: '{value}' is not a valid Value", .path.display())]
    InvalidValue {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("no measurements found in any input file")]
    Empty,
}
