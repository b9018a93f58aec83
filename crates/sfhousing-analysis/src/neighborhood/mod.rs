//! Aggregations restricted to a single neighborhood.
//!
//! The neighborhood name is matched exactly, with no case folding or
//! whitespace trimming. A name with no rows produces an empty table.

pub mod cost_comparison;
pub mod price_history;

pub use cost_comparison::{COST_TYPE, CostComparison, VALUE};
pub use price_history::NeighborhoodPriceHistory;

use polars::prelude::*;
use sfhousing_data::record::NEIGHBORHOOD;

/// Rows of `data` whose neighborhood equals `name` exactly.
pub(crate) fn filter_neighborhood(data: LazyFrame, name: &str) -> LazyFrame {
    data.filter(col(NEIGHBORHOOD).eq(lit(name)))
}
