//! Analysis Registry
//!
//! Central registry of the dashboard analyses. Maps each sidebar choice to
//! its chart type and to the inputs it needs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Chart types the rendering collaborator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Bar chart (optionally grouped by a color column)
    Bar,
    /// Line chart
    Line,
    /// Scatter points on a map
    ScatterMap,
    /// Parallel categories diagram
    ParallelCategories,
    /// Parallel coordinates plot
    ParallelCoordinates,
    /// Sunburst hierarchy
    Sunburst,
}

impl ChartKind {
    /// Returns the chart identifier.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::ScatterMap => "scatter-map",
            Self::ParallelCategories => "parallel-categories",
            Self::ParallelCoordinates => "parallel-coordinates",
            Self::Sunburst => "sunburst",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The analyses offered by the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Analysis {
    /// Mean housing units per year
    HousingUnitsPerYear,
    /// Mean gross rent per year
    AverageGrossRent,
    /// Mean sale price per square foot per year
    AverageSalesPrice,
    /// Yearly sale price for one neighborhood
    AveragePriceByNeighborhood,
    /// Neighborhoods with the highest mean of yearly mean sale price
    TopExpensiveNeighborhoods,
    /// Sale price against gross rent for one neighborhood
    RentVsSales,
    /// Neighborhood means placed on a map
    NeighborhoodMap,
    /// Most expensive neighborhoods across cost dimensions
    ParallelCategories,
    /// Neighborhood means with coordinates across all numeric dimensions
    ParallelCoordinates,
    /// Most expensive neighborhoods within each year
    Sunburst,
}

impl Analysis {
    /// Returns all analyses in sidebar order.
    pub const fn all() -> [Self; 10] {
        [
            Self::HousingUnitsPerYear,
            Self::AverageGrossRent,
            Self::AverageSalesPrice,
            Self::AveragePriceByNeighborhood,
            Self::TopExpensiveNeighborhoods,
            Self::RentVsSales,
            Self::NeighborhoodMap,
            Self::ParallelCategories,
            Self::ParallelCoordinates,
            Self::Sunburst,
        ]
    }

    /// Stable identifier.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::HousingUnitsPerYear => "housing-units-per-year",
            Self::AverageGrossRent => "average-gross-rent",
            Self::AverageSalesPrice => "average-sales-price",
            Self::AveragePriceByNeighborhood => "average-price-by-neighborhood",
            Self::TopExpensiveNeighborhoods => "top-expensive-neighborhoods",
            Self::RentVsSales => "rent-vs-sales",
            Self::NeighborhoodMap => "neighborhood-map",
            Self::ParallelCategories => "parallel-categories",
            Self::ParallelCoordinates => "parallel-coordinates",
            Self::Sunburst => "sunburst",
        }
    }

    /// Label shown in the sidebar.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HousingUnitsPerYear => "Housing Units Per Year",
            Self::AverageGrossRent => "Average Gross Rent",
            Self::AverageSalesPrice => "Average Sales Price",
            Self::AveragePriceByNeighborhood => "Average Price by Neighborhood",
            Self::TopExpensiveNeighborhoods => "Top 10 Most Expensive Neighborhoods",
            Self::RentVsSales => "Most Expensive Neighborhoods Rent vs. Sales",
            Self::NeighborhoodMap => "Neighborhood Map",
            Self::ParallelCategories => "Parallel Categories",
            Self::ParallelCoordinates => "Parallel Coordinates",
            Self::Sunburst => "Sunburst",
        }
    }

    /// Chart type used to render this analysis.
    pub const fn chart(&self) -> ChartKind {
        match self {
            Self::HousingUnitsPerYear | Self::TopExpensiveNeighborhoods | Self::RentVsSales => {
                ChartKind::Bar
            }
            Self::AverageGrossRent | Self::AverageSalesPrice | Self::AveragePriceByNeighborhood => {
                ChartKind::Line
            }
            Self::NeighborhoodMap => ChartKind::ScatterMap,
            Self::ParallelCategories => ChartKind::ParallelCategories,
            Self::ParallelCoordinates => ChartKind::ParallelCoordinates,
            Self::Sunburst => ChartKind::Sunburst,
        }
    }

    /// Whether a neighborhood name parameterizes the analysis.
    pub const fn requires_neighborhood(&self) -> bool {
        matches!(self, Self::AveragePriceByNeighborhood | Self::RentVsSales)
    }

    /// Whether the coordinate table must be loaded.
    pub const fn requires_locations(&self) -> bool {
        matches!(self, Self::NeighborhoodMap | Self::ParallelCoordinates)
    }

    /// Look up an analysis by slug or sidebar label (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().into_iter().find(|a| {
            a.slug().eq_ignore_ascii_case(name) || a.label().eq_ignore_ascii_case(name)
        })
    }

    /// Registry metadata for this analysis.
    pub fn info(&self) -> AnalysisInfo {
        AnalysisInfo {
            analysis: *self,
            name: self.slug(),
            label: self.label(),
            chart: self.chart(),
            description: self.description(),
            requires_neighborhood: self.requires_neighborhood(),
            requires_locations: self.requires_locations(),
        }
    }

    const fn description(&self) -> &'static str {
        match self {
            Self::HousingUnitsPerYear => "Mean housing units by year with a padded axis range",
            Self::AverageGrossRent => "Mean gross rent by year",
            Self::AverageSalesPrice => "Mean sale price per square foot by year",
            Self::AveragePriceByNeighborhood => {
                "Mean sale price per square foot by year for one neighborhood"
            }
            Self::TopExpensiveNeighborhoods => {
                "Neighborhoods ranked by the mean of their yearly mean sale price"
            }
            Self::RentVsSales => "Sale price and gross rent side by side for one neighborhood",
            Self::NeighborhoodMap => "Neighborhood means joined with coordinates",
            Self::ParallelCategories => "Most expensive neighborhoods across cost dimensions",
            Self::ParallelCoordinates => "Neighborhood means including coordinates",
            Self::Sunburst => "Most expensive neighborhoods within each year",
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Analysis metadata
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisInfo {
    /// The analysis
    pub analysis: Analysis,
    /// Stable identifier
    pub name: &'static str,
    /// Sidebar label
    pub label: &'static str,
    /// Chart type
    pub chart: ChartKind,
    /// Brief description of the table produced
    pub description: &'static str,
    /// Whether a neighborhood parameter is needed
    pub requires_neighborhood: bool,
    /// Whether the coordinate table is needed
    pub requires_locations: bool,
}

/// Get all available analysis info
pub fn available_analyses() -> Vec<AnalysisInfo> {
    Analysis::all().iter().map(Analysis::info).collect()
}

/// Get analyses rendered with the given chart type
pub fn analyses_by_chart(chart: ChartKind) -> Vec<AnalysisInfo> {
    available_analyses()
        .into_iter()
        .filter(|a| a.chart == chart)
        .collect()
}

/// Get analysis info by slug or label
pub fn get_analysis_info(name: &str) -> Option<AnalysisInfo> {
    Analysis::parse(name).map(|a| a.info())
}

/// Count analyses by chart type
pub fn count_by_chart() -> HashMap<ChartKind, usize> {
    let mut counts = HashMap::new();
    for info in available_analyses() {
        *counts.entry(info.chart).or_insert(0) += 1;
    }
    counts
}
