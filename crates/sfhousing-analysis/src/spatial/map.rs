//! Neighborhood Map
//!
//! Neighborhood means placed at their coordinates. Neighborhoods present in
//! only one of the two tables are kept with their missing side left null.

use super::means::neighborhood_means;
use super::{join_locations, require_locations, trim_neighborhood};
use crate::error::Result;
use crate::table::AggregateTable;
use crate::traits::Aggregation;
use polars::prelude::*;
use sfhousing_data::DataContext;
use sfhousing_data::record::NEIGHBORHOOD;
use tracing::debug;

/// Neighborhood means outer joined with coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborhoodMap;

impl Aggregation for NeighborhoodMap {
    fn name(&self) -> &str {
        "neighborhood_map"
    }

    fn required_columns(&self) -> &[&str] {
        &[
            "year",
            "neighborhood",
            "sale_price_sqr_foot",
            "housing_units",
            "gross_rent",
        ]
    }

    fn requires_locations(&self) -> bool {
        true
    }

    fn aggregate(&self, ctx: &DataContext) -> Result<AggregateTable> {
        let locations = require_locations(ctx, self.name())?;

        // Trim before grouping so "A" and "A " share one mean row
        let means = neighborhood_means(trim_neighborhood(ctx.housing_lazy()));
        let frame = join_locations(means, locations)
            .sort([NEIGHBORHOOD], SortMultipleOptions::default())
            .collect()?;

        debug!(rows = frame.height(), "joined neighborhood means with coordinates");
        Ok(AggregateTable::new(frame))
    }
}
