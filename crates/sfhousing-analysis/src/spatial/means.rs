//! Neighborhood Means
//!
//! One row per neighborhood holding the mean of every numeric column across
//! all years. Neighborhoods with any null mean are dropped.

use crate::error::Result;
use crate::table::AggregateTable;
use crate::traits::Aggregation;
use polars::prelude::*;
use sfhousing_data::record::{NEIGHBORHOOD, YEAR};
use sfhousing_data::{DataContext, NumericField};

/// Mean of each numeric column per neighborhood
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborhoodMeans;

impl Aggregation for NeighborhoodMeans {
    fn name(&self) -> &str {
        "neighborhood_means"
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

    fn aggregate(&self, ctx: &DataContext) -> Result<AggregateTable> {
        let frame = neighborhood_means(ctx.housing_lazy()).collect()?;
        Ok(AggregateTable::new(frame))
    }
}

/// Mean expressions for year and every numeric field.
pub(crate) fn numeric_means() -> Vec<Expr> {
    std::iter::once(col(YEAR).mean())
        .chain(NumericField::all().iter().map(|f| col(f.column()).mean()))
        .collect()
}

/// Returns a LazyFrame with columns:
/// [neighborhood, year, sale_price_sqr_foot, housing_units, gross_rent]
/// sorted by neighborhood.
pub(crate) fn neighborhood_means(data: LazyFrame) -> LazyFrame {
    data.group_by_stable([col(NEIGHBORHOOD)])
        .agg(numeric_means())
        .drop_nulls(None)
        .sort([NEIGHBORHOOD], SortMultipleOptions::default())
}
