//! Sunburst
//!
//! Within each year, the neighborhoods with the highest mean sale price.
//! The rows form a year -> neighborhood -> value hierarchy.

use super::yearly_neighborhood_prices;
use crate::error::Result;
use crate::table::AggregateTable;
use crate::traits::Aggregation;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use sfhousing_data::record::YEAR;
use sfhousing_data::{DataContext, NumericField};
use tracing::debug;

/// Configuration for the YearlyTopNeighborhoods ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunburstConfig {
    /// Neighborhoods kept per year (default: 7)
    pub per_year: usize,
}

impl Default for SunburstConfig {
    fn default() -> Self {
        Self { per_year: 7 }
    }
}

/// Most expensive neighborhoods within each year
#[derive(Debug, Clone, Default)]
pub struct YearlyTopNeighborhoods {
    config: SunburstConfig,
}

impl YearlyTopNeighborhoods {
    /// Create the ranking with a custom configuration.
    pub const fn with_config(config: SunburstConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub const fn config(&self) -> &SunburstConfig {
        &self.config
    }
}

impl Aggregation for YearlyTopNeighborhoods {
    fn name(&self) -> &str {
        "top_neighborhoods_per_year"
    }

    fn required_columns(&self) -> &[&str] {
        &["year", "neighborhood", "sale_price_sqr_foot"]
    }

    fn aggregate(&self, ctx: &DataContext) -> Result<AggregateTable> {
        let price = NumericField::SalePriceSqrFoot.column();
        let per_year = self.config.per_year as i64;

        // Ordinal rank breaks ties by position, i.e. by neighborhood name
        let rank = col(price)
            .rank(
                RankOptions {
                    method: RankMethod::Ordinal,
                    descending: true,
                },
                None,
            )
            .over([col(YEAR)])
            .cast(DataType::Int64);

        let frame = yearly_neighborhood_prices(ctx.housing_lazy())
            .filter(col(price).is_not_null())
            .filter(rank.lt_eq(lit(per_year)))
            .sort(
                [YEAR, price],
                SortMultipleOptions::default()
                    .with_order_descending_multi([false, true])
                    .with_maintain_order(true),
            )
            .collect()?;

        debug!(per_year, rows = frame.height(), "selected top neighborhoods per year");
        Ok(AggregateTable::new(frame))
    }
}
