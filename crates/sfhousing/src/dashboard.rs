//! Dashboard session.
//!
//! Holds the loaded dataset and answers sidebar selections with aggregate
//! tables and chart descriptions.

use crate::config::DashboardConfig;
use crate::error::Result;
use sfhousing_analysis::{AggregateTable, AggregationPipeline, Analysis};
use sfhousing_data::DataContext;
use sfhousing_output::ChartSpec;
use tracing::{debug, info};

/// The dataset and settings behind one dashboard.
#[derive(Debug, Clone)]
pub struct Dashboard {
    ctx: DataContext,
    config: DashboardConfig,
}

impl Dashboard {
    /// Load the dataset named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the housing table (or a required coordinate
    /// table) cannot be loaded, or if the ranking limits are invalid.
    pub fn open(config: DashboardConfig) -> Result<Self> {
        let ctx = DataContext::load(&config.housing_path, config.locations_to_load())?;
        Self::from_context(ctx, config)
    }

    /// Wrap an already loaded context.
    pub fn from_context(ctx: DataContext, config: DashboardConfig) -> Result<Self> {
        config.pipeline.validate()?;
        info!(
            rows = ctx.len(),
            neighborhoods = ctx.neighborhoods().len(),
            locations = ctx.has_locations(),
            "dashboard ready"
        );
        Ok(Self { ctx, config })
    }

    /// The loaded dataset.
    pub const fn context(&self) -> &DataContext {
        &self.ctx
    }

    /// Current configuration.
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Distinct neighborhoods in order of first appearance.
    pub fn neighborhoods(&self) -> &[String] {
        self.ctx.neighborhoods()
    }

    /// The configured neighborhood when present, else the first one.
    pub fn default_neighborhood(&self) -> Option<&str> {
        let preferred = self.config.default_neighborhood.as_str();
        if self.ctx.contains_neighborhood(preferred) {
            Some(preferred)
        } else {
            self.ctx.neighborhoods().first().map(String::as_str)
        }
    }

    /// The neighborhood an analysis runs with.
    ///
    /// Analyses that take no neighborhood get `None`; the others get the
    /// explicit choice or the default.
    pub fn resolve_neighborhood<'a>(
        &'a self,
        analysis: Analysis,
        neighborhood: Option<&'a str>,
    ) -> Option<&'a str> {
        if !analysis.requires_neighborhood() {
            return None;
        }
        neighborhood.or_else(|| self.default_neighborhood())
    }

    /// A pipeline over the loaded dataset.
    pub fn pipeline(&self) -> Result<AggregationPipeline<'_>> {
        Ok(AggregationPipeline::with_config(
            &self.ctx,
            self.config.pipeline.clone(),
        )?)
    }

    /// The aggregate table behind `analysis`.
    pub fn table(&self, analysis: Analysis, neighborhood: Option<&str>) -> Result<AggregateTable> {
        let neighborhood = self.resolve_neighborhood(analysis, neighborhood);
        debug!(analysis = analysis.slug(), ?neighborhood, "building table");
        Ok(self.pipeline()?.run(analysis, neighborhood)?)
    }

    /// The chart description for `analysis`.
    pub fn chart(&self, analysis: Analysis, neighborhood: Option<&str>) -> Result<ChartSpec> {
        let neighborhood = self.resolve_neighborhood(analysis, neighborhood);
        let table = self.pipeline()?.run(analysis, neighborhood)?;
        Ok(ChartSpec::build(analysis, &table, neighborhood)?)
    }
}
