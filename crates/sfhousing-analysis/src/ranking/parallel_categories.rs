//! Parallel Categories
//!
//! The most expensive neighborhoods by overall mean sale price, with their
//! mean housing units and gross rent alongside.

use super::descending_stable;
use crate::error::Result;
use crate::spatial::means::neighborhood_means;
use crate::table::AggregateTable;
use crate::traits::Aggregation;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use sfhousing_data::record::NEIGHBORHOOD;
use sfhousing_data::{DataContext, NumericField};

/// Configuration for the TopNeighborhoodProfiles ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelCategoriesConfig {
    /// Number of neighborhoods to keep (default: 10)
    pub count: usize,
}

impl Default for ParallelCategoriesConfig {
    fn default() -> Self {
        Self { count: 10 }
    }
}

/// Neighborhood means for the most expensive neighborhoods
#[derive(Debug, Clone, Default)]
pub struct TopNeighborhoodProfiles {
    config: ParallelCategoriesConfig,
}

impl TopNeighborhoodProfiles {
    /// Create the ranking with a custom configuration.
    pub const fn with_config(config: ParallelCategoriesConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub const fn config(&self) -> &ParallelCategoriesConfig {
        &self.config
    }
}

impl Aggregation for TopNeighborhoodProfiles {
    fn name(&self) -> &str {
        "top_neighborhood_profiles"
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
        let mut columns = vec![col(NEIGHBORHOOD)];
        columns.extend(NumericField::all().iter().map(|f| col(f.column())));

        let frame = neighborhood_means(ctx.housing_lazy())
            .sort([NumericField::SalePriceSqrFoot.column()], descending_stable())
            .limit(IdxSize::try_from(self.config.count).unwrap_or(IdxSize::MAX))
            .select(columns)
            .collect()?;

        Ok(AggregateTable::new(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::city_context;

    #[test]
    fn test_config_defaults() {
        assert_eq!(ParallelCategoriesConfig::default().count, 10);
    }

    #[test]
    fn test_columns_and_order() {
        let table = TopNeighborhoodProfiles::default()
            .aggregate(&city_context())
            .unwrap();

        assert_eq!(
            table.column_names(),
            vec![
                "neighborhood",
                "sale_price_sqr_foot",
                "housing_units",
                "gross_rent"
            ]
        );
        // flat means: Alpha 333.3, Gamma 250, Beta 250, Delta 50
        assert_eq!(
            table.str_values(NEIGHBORHOOD).unwrap(),
            vec![
                Some("Alpha".to_string()),
                Some("Beta".to_string()),
                Some("Gamma".to_string()),
                Some(" Delta ".to_string()),
            ]
        );
    }

    #[test]
    fn test_truncated() {
        let table = TopNeighborhoodProfiles::with_config(ParallelCategoriesConfig { count: 1 })
            .aggregate(&city_context())
            .unwrap();
        assert_eq!(table.height(), 1);
    }

    #[test]
    fn test_huge_count_saturates() {
        let table =
            TopNeighborhoodProfiles::with_config(ParallelCategoriesConfig { count: usize::MAX })
                .aggregate(&city_context())
                .unwrap();
        assert_eq!(table.height(), 4);
    }
}
