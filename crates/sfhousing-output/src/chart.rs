//! Chart descriptions handed to the rendering collaborator.
//!
//! A [`ChartSpec`] names the chart type, the columns bound to each visual
//! channel and the table rows as JSON records. Layout follows the dashboard:
//! yearly series go on a year axis, rent vs. sales is a grouped bar colored
//! by cost type, the sunburst nests neighborhoods under years.

use crate::cells;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sfhousing_analysis::neighborhood::{COST_TYPE, VALUE};
use sfhousing_analysis::{AggregateTable, Analysis, AxisRange, ChartKind};
use sfhousing_data::NumericField;
use sfhousing_data::record::{LAT, LON, NEIGHBORHOOD, YEAR};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while describing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The table lacks a column the chart binds.
    #[error("Chart '{analysis}' needs column '{column}'")]
    MissingColumn {
        /// Analysis slug.
        analysis: String,
        /// Missing column.
        column: String,
    },

    /// The title names a neighborhood but none was given.
    #[error("Chart '{0}' needs a neighborhood")]
    NeighborhoodRequired(String),

    /// Reading the table failed.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// How bars sharing an x value are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    /// Bars stacked on top of each other.
    Relative,
    /// Bars side by side.
    Group,
}

/// Serializable description of one dashboard chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Analysis the chart shows.
    pub analysis: Analysis,

    /// Chart type.
    pub kind: ChartKind,

    /// Chart title.
    pub title: String,

    /// Column on the x axis (longitude for maps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,

    /// Column on the y axis (latitude for maps, values for sunbursts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,

    /// Column driving color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Column driving marker size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Bar layout for bar charts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,

    /// Hierarchy levels, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,

    /// Columns drawn as parallel axes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<String>,

    /// Advisory y axis bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_range: Option<AxisRange>,

    /// X axis title override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_title: Option<String>,

    /// Y axis title override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_title: Option<String>,

    /// Table rows keyed by column name.
    pub records: Vec<Map<String, Value>>,

    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

impl ChartSpec {
    fn new(analysis: Analysis, title: impl Into<String>) -> Self {
        Self {
            analysis,
            kind: analysis.chart(),
            title: title.into(),
            x: None,
            y: None,
            color: None,
            size: None,
            bar_mode: None,
            path: Vec::new(),
            dimensions: Vec::new(),
            y_range: None,
            x_title: None,
            y_title: None,
            records: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    /// Describe the chart for `analysis` over its aggregate `table`.
    ///
    /// `neighborhood` is required by the analyses that filter on one. An
    /// empty table yields a chart with no records.
    pub fn build(
        analysis: Analysis,
        table: &AggregateTable,
        neighborhood: Option<&str>,
    ) -> Result<Self, ChartError> {
        let named = || {
            neighborhood.ok_or_else(|| ChartError::NeighborhoodRequired(analysis.slug().into()))
        };
        let sale_price = NumericField::SalePriceSqrFoot.column();
        let gross_rent = NumericField::GrossRent.column();

        let spec = match analysis {
            Analysis::HousingUnitsPerYear => {
                let mut spec = Self::new(analysis, "Average Housing Units Per Year")
                    .axes(YEAR, NumericField::HousingUnits.column())
                    .bar_mode(BarMode::Relative);
                spec.y_range = table.display_range();
                spec
            }
            Analysis::AverageGrossRent => {
                Self::new(analysis, "Average Gross Rent by Year").axes(YEAR, gross_rent)
            }
            Analysis::AverageSalesPrice => {
                Self::new(analysis, "Average Sale Price per Square Foot by Year")
                    .axes(YEAR, sale_price)
            }
            Analysis::AveragePriceByNeighborhood => Self::new(
                analysis,
                format!("Average Sale Price per Square Foot in {}", named()?),
            )
            .axes(YEAR, sale_price),
            Analysis::TopExpensiveNeighborhoods => Self::new(
                analysis,
                "Top 10 Most Expensive Neighborhoods in San Francisco",
            )
            .axes(NEIGHBORHOOD, sale_price)
            .bar_mode(BarMode::Relative),
            Analysis::RentVsSales => {
                let mut spec = Self::new(
                    analysis,
                    format!("Sale Price per Square Foot and Gross Rent in {}", named()?),
                )
                .axes(YEAR, VALUE)
                .bar_mode(BarMode::Group);
                spec.color = Some(COST_TYPE.to_string());
                spec.x_title = Some("Year".to_string());
                spec.y_title = Some("Cost".to_string());
                spec
            }
            Analysis::NeighborhoodMap => {
                let mut spec = Self::new(
                    analysis,
                    "Average Sale Price Per Square Foot and Gross Rent in San Francisco",
                )
                .axes(LON, LAT);
                spec.size = Some(sale_price.to_string());
                spec.color = Some(gross_rent.to_string());
                spec
            }
            Analysis::ParallelCategories => {
                let mut spec = Self::new(
                    analysis,
                    "Parallel Categories Analysis of Most Expensive San Francisco Neighborhoods",
                );
                spec.dimensions = std::iter::once(NEIGHBORHOOD)
                    .chain(NumericField::all().iter().map(NumericField::column))
                    .map(str::to_string)
                    .collect();
                spec.color = Some(sale_price.to_string());
                spec
            }
            Analysis::ParallelCoordinates => {
                let mut spec = Self::new(
                    analysis,
                    "Parallel Coordinates Analysis of San Francisco Neighborhoods",
                );
                spec.dimensions = NumericField::all()
                    .iter()
                    .map(NumericField::column)
                    .chain([LAT, LON])
                    .map(str::to_string)
                    .collect();
                spec.color = Some(sale_price.to_string());
                spec
            }
            Analysis::Sunburst => {
                let mut spec = Self::new(
                    analysis,
                    "Costs Analysis of Most Expensive Neighborhoods in San Francisco per Year",
                );
                spec.path = vec![YEAR.to_string(), NEIGHBORHOOD.to_string()];
                spec.y = Some(sale_price.to_string());
                spec.color = Some(sale_price.to_string());
                spec
            }
        };

        spec.check_columns(table)?.with_records(table)
    }

    fn axes(mut self, x: &str, y: &str) -> Self {
        self.x = Some(x.to_string());
        self.y = Some(y.to_string());
        self
    }

    const fn bar_mode(mut self, mode: BarMode) -> Self {
        self.bar_mode = Some(mode);
        self
    }

    /// Every column the chart binds, in channel order.
    pub fn bound_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = [&self.x, &self.y, &self.color, &self.size]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .chain(self.path.iter().map(String::as_str))
            .chain(self.dimensions.iter().map(String::as_str))
            .collect();
        columns.dedup();
        columns
    }

    fn check_columns(self, table: &AggregateTable) -> Result<Self, ChartError> {
        let available = table.column_names();
        if let Some(column) = self
            .bound_columns()
            .into_iter()
            .find(|c| !available.iter().any(|a| a == c))
        {
            return Err(ChartError::MissingColumn {
                analysis: self.analysis.slug().to_string(),
                column: column.to_string(),
            });
        }
        Ok(self)
    }

    fn with_records(mut self, table: &AggregateTable) -> Result<Self, ChartError> {
        self.records = cells::records(table.frame())?;
        debug!(
            chart = %self.kind,
            records = self.records.len(),
            "described chart"
        );
        Ok(self)
    }

    /// Whether the chart has nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convert the chart description to a JSON string.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
