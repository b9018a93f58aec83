//! Aggregation pipeline
//!
//! Borrows the loaded [`DataContext`] and builds one aggregate table per
//! request. Nothing is cached between requests.

use crate::error::{AnalysisError, Result};
use crate::neighborhood::{CostComparison, NeighborhoodPriceHistory};
use crate::ranking::{
    ParallelCategoriesConfig, SunburstConfig, TopNeighborhoodProfiles, TopNeighborhoods,
    TopNeighborhoodsConfig, YearlyTopNeighborhoods,
};
use crate::registry::Analysis;
use crate::spatial::{NeighborhoodMap, NeighborhoodMeans, ParallelCoordinates};
use crate::table::AggregateTable;
use crate::traits::Aggregation;
use crate::yearly::{YearlyHousingUnits, YearlyMean};
use serde::{Deserialize, Serialize};
use sfhousing_data::DataContext;
use tracing::debug;

/// Tunable limits of the ranking analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Neighborhoods in the top-k ranking (default: 10)
    pub top_k: usize,
    /// Neighborhoods in the parallel categories view (default: 10)
    pub parallel_categories: usize,
    /// Neighborhoods per year in the sunburst (default: 7)
    pub sunburst_per_year: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            parallel_categories: 10,
            sunburst_per_year: 7,
        }
    }
}

impl PipelineConfig {
    /// Check that every limit is positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("top_k", self.top_k),
            ("parallel_categories", self.parallel_categories),
            ("sunburst_per_year", self.sunburst_per_year),
        ] {
            if value == 0 {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{} must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Builds aggregate tables over a borrowed data context.
#[derive(Debug, Clone)]
pub struct AggregationPipeline<'a> {
    ctx: &'a DataContext,
    config: PipelineConfig,
}

impl<'a> AggregationPipeline<'a> {
    /// Create a pipeline with the default configuration.
    pub fn new(ctx: &'a DataContext) -> Self {
        Self {
            ctx,
            config: PipelineConfig::default(),
        }
    }

    /// Create a pipeline with a validated configuration.
    pub fn with_config(ctx: &'a DataContext, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { ctx, config })
    }

    /// The borrowed data context.
    pub const fn context(&self) -> &'a DataContext {
        self.ctx
    }

    /// Current configuration.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run a single aggregation against the context.
    pub fn execute(&self, aggregation: &dyn Aggregation) -> Result<AggregateTable> {
        if aggregation.requires_locations() && !self.ctx.has_locations() {
            return Err(AnalysisError::LocationsUnavailable(
                aggregation.name().to_string(),
            ));
        }

        let available = self.ctx.housing().get_column_names();
        if let Some(column) = aggregation
            .required_columns()
            .iter()
            .find(|c| !available.iter().any(|name| name.as_str() == **c))
        {
            return Err(AnalysisError::MissingColumn {
                aggregation: aggregation.name().to_string(),
                column: column.to_string(),
            });
        }

        let table = aggregation.aggregate(self.ctx)?;
        debug!(
            aggregation = aggregation.name(),
            rows = table.height(),
            "aggregation complete"
        );
        Ok(table)
    }

    /// Mean housing units per year with an advisory display range.
    pub fn yearly_housing_units(&self) -> Result<AggregateTable> {
        self.execute(&YearlyHousingUnits)
    }

    /// Mean gross rent per year.
    pub fn yearly_gross_rent(&self) -> Result<AggregateTable> {
        self.execute(&YearlyMean::gross_rent())
    }

    /// Mean sale price per square foot per year.
    pub fn yearly_sale_price(&self) -> Result<AggregateTable> {
        self.execute(&YearlyMean::sale_price())
    }

    /// Mean sale price per year for rows matching `name` exactly.
    pub fn price_by_neighborhood(&self, name: &str) -> Result<AggregateTable> {
        self.execute(&NeighborhoodPriceHistory::new(name))
    }

    /// The `k` neighborhoods with the highest mean of yearly mean sale price.
    pub fn top_k_neighborhoods_by_sale_price(&self, k: usize) -> Result<AggregateTable> {
        self.execute(&TopNeighborhoods::with_config(TopNeighborhoodsConfig { k }))
    }

    /// Long-form sale price and gross rent for `name`.
    pub fn cost_comparison(&self, name: &str) -> Result<AggregateTable> {
        self.execute(&CostComparison::new(name))
    }

    /// Mean of every numeric column per neighborhood, incomplete rows dropped.
    pub fn neighborhood_means(&self) -> Result<AggregateTable> {
        self.execute(&NeighborhoodMeans)
    }

    /// Neighborhood means outer joined with coordinates.
    pub fn neighborhood_map_data(&self) -> Result<AggregateTable> {
        self.execute(&NeighborhoodMap)
    }

    /// The most expensive neighborhoods with their mean costs.
    pub fn top_parallel_categories(&self) -> Result<AggregateTable> {
        self.execute(&TopNeighborhoodProfiles::with_config(
            ParallelCategoriesConfig {
                count: self.config.parallel_categories,
            },
        ))
    }

    /// Per-neighborhood means of the dataset joined with coordinates.
    pub fn parallel_coordinates_data(&self) -> Result<AggregateTable> {
        self.execute(&ParallelCoordinates)
    }

    /// The most expensive neighborhoods within each year.
    pub fn top_per_year_sunburst(&self) -> Result<AggregateTable> {
        self.execute(&YearlyTopNeighborhoods::with_config(SunburstConfig {
            per_year: self.config.sunburst_per_year,
        }))
    }

    /// Build the table behind a dashboard analysis.
    ///
    /// `neighborhood` is required by the analyses that filter on one and
    /// ignored by the rest.
    pub fn run(&self, analysis: Analysis, neighborhood: Option<&str>) -> Result<AggregateTable> {
        let needs_name = || {
            neighborhood.ok_or_else(|| AnalysisError::NeighborhoodRequired(analysis.slug().into()))
        };

        match analysis {
            Analysis::HousingUnitsPerYear => self.yearly_housing_units(),
            Analysis::AverageGrossRent => self.yearly_gross_rent(),
            Analysis::AverageSalesPrice => self.yearly_sale_price(),
            Analysis::AveragePriceByNeighborhood => self.price_by_neighborhood(needs_name()?),
            Analysis::TopExpensiveNeighborhoods => {
                self.top_k_neighborhoods_by_sale_price(self.config.top_k)
            }
            Analysis::RentVsSales => self.cost_comparison(needs_name()?),
            Analysis::NeighborhoodMap => self.neighborhood_map_data(),
            Analysis::ParallelCategories => self.top_parallel_categories(),
            Analysis::ParallelCoordinates => self.parallel_coordinates_data(),
            Analysis::Sunburst => self.top_per_year_sunburst(),
        }
    }
}
