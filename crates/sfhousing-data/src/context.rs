//! Immutable data context shared by every aggregation.
//!
//! The context is built once at startup from the source CSVs and then only
//! borrowed. Nothing in the dashboard mutates it, so no locking is involved.

use crate::error::Result;
use crate::loader;
use crate::record::{
    HousingRecord, LAT, LON, NEIGHBORHOOD, NeighborhoodLocation, NumericField, YEAR,
};
use polars::prelude::*;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::info;

/// Loaded housing dataset and optional neighborhood coordinates.
#[derive(Debug, Clone)]
pub struct DataContext {
    housing: DataFrame,
    locations: Option<DataFrame>,
    neighborhoods: Vec<String>,
    years: Vec<i32>,
}

impl DataContext {
    /// Build a context from already-parsed records.
    pub fn new(
        records: Vec<HousingRecord>,
        locations: Option<Vec<NeighborhoodLocation>>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        let neighborhoods: Vec<String> = records
            .iter()
            .filter(|r| seen.insert(r.neighborhood.as_str()))
            .map(|r| r.neighborhood.clone())
            .collect();
        let years: Vec<i32> = records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let housing = housing_frame(&records)?;
        let locations = locations.as_deref().map(locations_frame).transpose()?;

        Ok(Self {
            housing,
            locations,
            neighborhoods,
            years,
        })
    }

    /// Load the housing CSV and, when given, the coordinates CSV.
    ///
    /// Any failure here is fatal for the dashboard.
    pub fn load(housing_path: &Path, locations_path: Option<&Path>) -> Result<Self> {
        let records = loader::load_housing(housing_path)?;
        info!(
            path = %housing_path.display(),
            rows = records.len(),
            "loaded housing dataset"
        );

        let locations = match locations_path {
            Some(path) => {
                let locations = loader::load_locations(path)?;
                info!(
                    path = %path.display(),
                    rows = locations.len(),
                    "loaded neighborhood coordinates"
                );
                Some(locations)
            }
            None => None,
        };

        Self::new(records, locations)
    }

    /// Housing dataset with columns
    /// `[year, neighborhood, sale_price_sqr_foot, housing_units, gross_rent]`.
    pub const fn housing(&self) -> &DataFrame {
        &self.housing
    }

    /// Lazy view over the housing dataset.
    pub fn housing_lazy(&self) -> LazyFrame {
        self.housing.clone().lazy()
    }

    /// Location table with columns `[neighborhood, Lat, Lon]`, if loaded.
    pub const fn locations(&self) -> Option<&DataFrame> {
        self.locations.as_ref()
    }

    /// Whether the coordinate lookup table is available.
    pub const fn has_locations(&self) -> bool {
        self.locations.is_some()
    }

    /// Distinct neighborhoods in order of first appearance.
    pub fn neighborhoods(&self) -> &[String] {
        &self.neighborhoods
    }

    /// Whether `name` matches a neighborhood exactly.
    pub fn contains_neighborhood(&self, name: &str) -> bool {
        self.neighborhoods.iter().any(|n| n == name)
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Number of housing records.
    pub fn len(&self) -> usize {
        self.housing.height()
    }

    /// Whether the housing dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.housing.height() == 0
    }
}

/// Convert housing records into a DataFrame.
pub fn housing_frame(records: &[HousingRecord]) -> PolarsResult<DataFrame> {
    let years: Vec<i32> = records.iter().map(|r| r.year).collect();
    let neighborhoods: Vec<&str> = records.iter().map(|r| r.neighborhood.as_str()).collect();

    let mut columns: Vec<Column> = vec![
        Series::new(YEAR.into(), years).into(),
        Series::new(NEIGHBORHOOD.into(), neighborhoods).into(),
    ];
    for field in NumericField::all() {
        let values: Vec<Option<f64>> = records.iter().map(|r| field.value(r)).collect();
        columns.push(Series::new(field.column().into(), values).into());
    }

    DataFrame::new(columns)
}

/// Convert neighborhood locations into a DataFrame.
pub fn locations_frame(locations: &[NeighborhoodLocation]) -> PolarsResult<DataFrame> {
    let names: Vec<&str> = locations.iter().map(|l| l.neighborhood.as_str()).collect();
    let lats: Vec<f64> = locations.iter().map(|l| l.lat).collect();
    let lons: Vec<f64> = locations.iter().map(|l| l.lon).collect();

    DataFrame::new(vec![
        Series::new(NEIGHBORHOOD.into(), names).into(),
        Series::new(LAT.into(), lats).into(),
        Series::new(LON.into(), lons).into(),
    ])
}
