//! The trait every dashboard aggregation implements.

use crate::error::Result;
use crate::table::AggregateTable;
use sfhousing_data::DataContext;
use std::fmt::Debug;

/// A named reduction of the housing dataset into one chart-ready table.
pub trait Aggregation: Debug {
    /// Stable identifier used in logs and lookups.
    fn name(&self) -> &str;

    /// Housing columns the aggregation reads.
    fn required_columns(&self) -> &[&str];

    /// Whether the aggregation joins against the coordinate table.
    fn requires_locations(&self) -> bool {
        false
    }

    /// Build the aggregate table.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying frame operations fail or a
    /// required table is missing from the context.
    fn aggregate(&self, ctx: &DataContext) -> Result<AggregateTable>;
}
