//! Error types for aggregation.

use thiserror::Error;

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while building an aggregate table.
///
/// An unmatched neighborhood is not an error: it yields an empty table.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// The analysis joins against coordinates but none were loaded
    #[error("Analysis '{0}' requires the neighborhood coordinates table")]
    LocationsUnavailable(String),

    /// The housing table lacks a column the aggregation reads
    #[error("Aggregation '{aggregation}' requires column '{column}'")]
    MissingColumn {
        /// Aggregation name
        aggregation: String,
        /// Missing column
        column: String,
    },

    /// The analysis needs a neighborhood name and none was supplied
    #[error("Analysis '{0}' requires a neighborhood")]
    NeighborhoodRequired(String),

    /// No analysis matches the given name
    #[error("Unknown analysis: {0}")]
    UnknownAnalysis(String),

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
