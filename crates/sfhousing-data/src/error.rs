//! Error types for data operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading the census tables.
///
/// Every variant is fatal at startup: the dashboard cannot run without its
/// dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// Source file could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column '{column}' in {table}")]
    MissingColumn {
        /// Table being loaded
        table: String,
        /// Name of the missing column
        column: String,
    },

    /// A row was present but could not be interpreted
    #[error("Malformed row {row} in {table}: {reason}")]
    MalformedRow {
        /// Table being loaded
        table: String,
        /// 1-based data row number
        row: usize,
        /// Description of the problem
        reason: String,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
