//! Per-neighborhood means and joins against the coordinate table.
//!
//! Joins trim leading and trailing whitespace from the neighborhood on both
//! sides first, then keep rows from either side (full outer join).

pub mod map;
pub mod means;
pub mod parallel_coordinates;

pub use map::NeighborhoodMap;
pub use means::NeighborhoodMeans;
pub use parallel_coordinates::ParallelCoordinates;

use crate::error::{AnalysisError, Result};
use polars::prelude::*;
use sfhousing_data::DataContext;
use sfhousing_data::record::NEIGHBORHOOD;

/// The coordinate table, or `LocationsUnavailable` naming `analysis`.
pub(crate) fn require_locations<'a>(ctx: &'a DataContext, analysis: &str) -> Result<&'a DataFrame> {
    ctx.locations()
        .ok_or_else(|| AnalysisError::LocationsUnavailable(analysis.to_string()))
}

/// Strip surrounding whitespace from the neighborhood column.
pub(crate) fn trim_neighborhood(data: LazyFrame) -> LazyFrame {
    data.with_column(col(NEIGHBORHOOD).str().strip_chars(lit(NULL)))
}

/// Full outer join of `data` with `locations` on trimmed neighborhood.
pub(crate) fn join_locations(data: LazyFrame, locations: &DataFrame) -> LazyFrame {
    trim_neighborhood(data).join(
        trim_neighborhood(locations.clone().lazy()),
        [col(NEIGHBORHOOD)],
        [col(NEIGHBORHOOD)],
        JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns),
    )
}
