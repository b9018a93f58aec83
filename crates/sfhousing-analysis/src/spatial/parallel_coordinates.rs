//! Parallel Coordinates
//!
//! Joins every housing record with its neighborhood's coordinates, drops
//! incomplete rows, then averages each numeric column per neighborhood.

use super::means::numeric_means;
use super::{join_locations, require_locations};
use crate::error::Result;
use crate::table::AggregateTable;
use crate::traits::Aggregation;
use polars::prelude::*;
use sfhousing_data::DataContext;
use sfhousing_data::record::{LAT, LON, NEIGHBORHOOD};

/// Per-neighborhood means including latitude and longitude
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelCoordinates;

impl Aggregation for ParallelCoordinates {
    fn name(&self) -> &str {
        "parallel_coordinates"
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

        let mut means = numeric_means();
        means.push(col(LAT).mean());
        means.push(col(LON).mean());

        let frame = join_locations(ctx.housing_lazy(), locations)
            .drop_nulls(None)
            .group_by_stable([col(NEIGHBORHOOD)])
            .agg(means)
            .sort([NEIGHBORHOOD], SortMultipleOptions::default())
            .collect()?;

        Ok(AggregateTable::new(frame))
    }
}
