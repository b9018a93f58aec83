#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dashboard;
pub mod error;

// Re-export main types from sub-crates
pub use sfhousing_analysis as analysis;
pub use sfhousing_data as data;
pub use sfhousing_output as output;

pub use analysis::{AggregateTable, Analysis, AnalysisInfo, ChartKind, available_analyses};
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use output::{ChartSpec, ExportFormat, Exporter};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
