//! Top Most Expensive Neighborhoods
//!
//! Ranks neighborhoods by the mean of their yearly mean sale price. Each
//! year counts once regardless of how many records it has, so this differs
//! from a flat mean when record counts vary by year.

use super::{descending_stable, yearly_neighborhood_prices};
use crate::error::Result;
use crate::table::AggregateTable;
use crate::traits::Aggregation;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use sfhousing_data::record::NEIGHBORHOOD;
use sfhousing_data::{DataContext, NumericField};
use tracing::debug;

/// Configuration for the TopNeighborhoods ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopNeighborhoodsConfig {
    /// Number of neighborhoods to keep (default: 10)
    pub k: usize,
}

impl Default for TopNeighborhoodsConfig {
    fn default() -> Self {
        Self { k: 10 }
    }
}

/// The k neighborhoods with the highest mean-of-yearly-means sale price
#[derive(Debug, Clone, Default)]
pub struct TopNeighborhoods {
    config: TopNeighborhoodsConfig,
}

impl TopNeighborhoods {
    /// Create the ranking with a custom configuration.
    pub const fn with_config(config: TopNeighborhoodsConfig) -> Self {
        Self { config }
    }

    /// Create the ranking keeping `k` neighborhoods.
    pub const fn new(k: usize) -> Self {
        Self::with_config(TopNeighborhoodsConfig { k })
    }

    /// Current configuration.
    pub const fn config(&self) -> &TopNeighborhoodsConfig {
        &self.config
    }
}

impl Aggregation for TopNeighborhoods {
    fn name(&self) -> &str {
        "top_neighborhoods_by_sale_price"
    }

    fn required_columns(&self) -> &[&str] {
        &["year", "neighborhood", "sale_price_sqr_foot"]
    }

    fn aggregate(&self, ctx: &DataContext) -> Result<AggregateTable> {
        let price = NumericField::SalePriceSqrFoot.column();

        // Stage 1: mean per (year, neighborhood)
        // Stage 2: mean of those per neighborhood, in stage-1 appearance order
        let frame = yearly_neighborhood_prices(ctx.housing_lazy())
            .group_by_stable([col(NEIGHBORHOOD)])
            .agg([col(price).mean()])
            .filter(col(price).is_not_null())
            .sort([price], descending_stable())
            .limit(IdxSize::try_from(self.config.k).unwrap_or(IdxSize::MAX))
            .collect()?;

        debug!(k = self.config.k, rows = frame.height(), "ranked neighborhoods");
        Ok(AggregateTable::new(frame))
    }
}
