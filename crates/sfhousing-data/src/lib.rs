#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod context;
pub mod error;
pub mod loader;
pub mod record;

pub use context::DataContext;
pub use error::{DataError, Result};
pub use record::{HousingRecord, NeighborhoodLocation, NumericField};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
