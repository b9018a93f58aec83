//! Average Price by Neighborhood
//!
//! Yearly mean sale price per square foot for one neighborhood.

use super::filter_neighborhood;
use crate::error::Result;
use crate::table::AggregateTable;
use crate::traits::Aggregation;
use crate::yearly::mean::yearly_mean;
use sfhousing_data::{DataContext, NumericField};
use tracing::debug;

/// Yearly mean sale price for a single neighborhood.
#[derive(Debug, Clone)]
pub struct NeighborhoodPriceHistory {
    neighborhood: String,
}

impl NeighborhoodPriceHistory {
    /// Create the aggregation for `neighborhood`.
    pub fn new(neighborhood: impl Into<String>) -> Self {
        Self {
            neighborhood: neighborhood.into(),
        }
    }

    /// The selected neighborhood.
    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }
}

impl Aggregation for NeighborhoodPriceHistory {
    fn name(&self) -> &str {
        "price_by_neighborhood"
    }

    fn required_columns(&self) -> &[&str] {
        &["year", "neighborhood", "sale_price_sqr_foot"]
    }

    fn aggregate(&self, ctx: &DataContext) -> Result<AggregateTable> {
        let filtered = filter_neighborhood(ctx.housing_lazy(), &self.neighborhood);
        let frame = yearly_mean(filtered, NumericField::SalePriceSqrFoot).collect()?;

        if frame.height() == 0 {
            debug!(neighborhood = %self.neighborhood, "no rows for neighborhood");
        }

        Ok(AggregateTable::new(frame))
    }
}
