#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cells;
pub mod chart;
pub mod export;

pub use chart::{BarMode, ChartError, ChartSpec};
pub use export::{ExportError, ExportFormat, Exporter, to_ascii_table};
