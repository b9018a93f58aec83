//! Rankings of neighborhoods by sale price.

pub mod parallel_categories;
pub mod sunburst;
pub mod top_k;

pub use parallel_categories::{ParallelCategoriesConfig, TopNeighborhoodProfiles};
pub use sunburst::{SunburstConfig, YearlyTopNeighborhoods};
pub use top_k::{TopNeighborhoods, TopNeighborhoodsConfig};

use polars::prelude::*;
use sfhousing_data::NumericField;
use sfhousing_data::record::{NEIGHBORHOOD, YEAR};

/// Mean sale price per (year, neighborhood), ordered by year then name.
///
/// Returns a LazyFrame with columns: [year, neighborhood, sale_price_sqr_foot]
pub(crate) fn yearly_neighborhood_prices(data: LazyFrame) -> LazyFrame {
    let price = NumericField::SalePriceSqrFoot.column();
    data.group_by_stable([col(YEAR), col(NEIGHBORHOOD)])
        .agg([col(price).mean()])
        .sort(
            [YEAR, NEIGHBORHOOD],
            SortMultipleOptions::default().with_maintain_order(true),
        )
}

/// Stable descending sort; equal values keep their input order, nulls last.
pub(crate) fn descending_stable() -> SortMultipleOptions {
    SortMultipleOptions::default()
        .with_order_descending(true)
        .with_nulls_last(true)
        .with_maintain_order(true)
}
