//! Rent vs. Sales
//!
//! Reshapes one neighborhood's sale price and gross rent from wide to long
//! form so both series can be drawn as grouped bars on a shared year axis.
//! Every sale price row comes first, then every gross rent row, each keeping
//! its year.

use super::filter_neighborhood;
use crate::error::Result;
use crate::table::AggregateTable;
use crate::traits::Aggregation;
use polars::prelude::*;
use sfhousing_data::record::YEAR;
use sfhousing_data::{DataContext, NumericField};
use tracing::debug;

/// Column naming which cost a long-form row carries.
pub const COST_TYPE: &str = "CostType";

/// Column holding the cost value of a long-form row.
pub const VALUE: &str = "Value";

/// Fields reshaped into long form, in output order.
pub const COST_FIELDS: [NumericField; 2] = [NumericField::SalePriceSqrFoot, NumericField::GrossRent];

/// Long-form sale price and gross rent for one neighborhood.
#[derive(Debug, Clone)]
pub struct CostComparison {
    neighborhood: String,
}

impl CostComparison {
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

    /// The filtered wide table: [year, sale_price_sqr_foot, gross_rent].
    pub fn wide(&self, ctx: &DataContext) -> Result<DataFrame> {
        let frame = self.wide_lazy(ctx).collect()?;
        Ok(frame)
    }

    fn wide_lazy(&self, ctx: &DataContext) -> LazyFrame {
        let mut columns = vec![col(YEAR)];
        columns.extend(COST_FIELDS.iter().map(|f| col(f.column())));
        filter_neighborhood(ctx.housing_lazy(), &self.neighborhood).select(columns)
    }
}

impl Aggregation for CostComparison {
    fn name(&self) -> &str {
        "cost_comparison"
    }

    fn required_columns(&self) -> &[&str] {
        &["year", "neighborhood", "sale_price_sqr_foot", "gross_rent"]
    }

    fn aggregate(&self, ctx: &DataContext) -> Result<AggregateTable> {
        let wide = self.wide_lazy(ctx);

        let parts: Vec<LazyFrame> = COST_FIELDS
            .iter()
            .map(|field| {
                wide.clone()
                    .select([col(YEAR), col(field.column()).alias(VALUE)])
                    .with_column(lit(field.column()).alias(COST_TYPE))
                    .select([col(YEAR), col(COST_TYPE), col(VALUE)])
            })
            .collect();

        let frame = concat(parts, UnionArgs::default())?.collect()?;
        debug!(
            neighborhood = %self.neighborhood,
            rows = frame.height(),
            "reshaped costs to long form"
        );

        Ok(AggregateTable::new(frame))
    }
}
