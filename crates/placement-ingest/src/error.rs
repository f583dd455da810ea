//! Error types for candidate data ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading and interpreting candidate data.
///
/// Every variant is fatal to the current evaluation; there is no retry or
/// partial-result path.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid tabular data.
    #[error("failed to parse CSV: {source}")]
    Parse {
        #[source]
        source: csv::Error,
    },

    /// The file parsed but contains no data rows.
    #[error("dataset contains no rows")]
    EmptyDataset,

    /// No column qualifies as a numeric skill score.
    #[error("no numeric skill columns found in CSV")]
    NoNumericColumns,
}

impl From<csv::Error> for IngestError {
    fn from(source: csv::Error) -> Self {
        IngestError::Parse { source }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
