#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod neighborhood;
pub mod pipeline;
pub mod ranking;
pub mod registry;
pub mod spatial;
pub mod table;
pub mod traits;
pub mod yearly;

#[cfg(test)]
mod fixtures;

pub use error::{AnalysisError, Result};
pub use pipeline::{AggregationPipeline, PipelineConfig};
pub use registry::{
    Analysis, AnalysisInfo, ChartKind, analyses_by_chart, available_analyses, get_analysis_info,
};
pub use table::{AggregateTable, AxisRange};
pub use traits::Aggregation;
