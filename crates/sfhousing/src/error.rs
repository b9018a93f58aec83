//! Errors raised by the dashboard session.

use sfhousing_analysis::AnalysisError;
use sfhousing_data::DataError;
use sfhousing_output::ChartError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening or querying the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Loading the dataset failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// An aggregation failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Describing a chart failed.
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// The config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for `DashboardConfig`.
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
