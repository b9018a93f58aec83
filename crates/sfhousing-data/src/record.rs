//! Typed rows of the census dataset and the coordinate lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column holding the census year.
pub const YEAR: &str = "year";

/// Column holding the neighborhood name.
pub const NEIGHBORHOOD: &str = "neighborhood";

/// Latitude column of the location table.
pub const LAT: &str = "Lat";

/// Longitude column of the location table.
pub const LON: &str = "Lon";

/// Numeric columns of the housing dataset that aggregations may reduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    /// Sale price per square foot
    SalePriceSqrFoot,
    /// Number of housing units
    HousingUnits,
    /// Gross rent
    GrossRent,
}

impl NumericField {
    /// Returns all numeric fields in source column order.
    pub const fn all() -> [Self; 3] {
        [Self::SalePriceSqrFoot, Self::HousingUnits, Self::GrossRent]
    }

    /// Returns the column name in the housing CSV and frame.
    pub const fn column(&self) -> &'static str {
        match self {
            Self::SalePriceSqrFoot => "sale_price_sqr_foot",
            Self::HousingUnits => "housing_units",
            Self::GrossRent => "gross_rent",
        }
    }

    /// Reads this field from a record.
    pub const fn value(&self, record: &HousingRecord) -> Option<f64> {
        match self {
            Self::SalePriceSqrFoot => record.sale_price_sqr_foot,
            Self::HousingUnits => record.housing_units,
            Self::GrossRent => record.gross_rent,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// One row of the neighborhood census dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingRecord {
    /// Census year (not unique across rows).
    pub year: i32,

    /// Neighborhood name, kept exactly as it appears in the source.
    pub neighborhood: String,

    /// Sale price per square foot; null when unreported.
    pub sale_price_sqr_foot: Option<f64>,

    /// Housing unit count.
    pub housing_units: Option<f64>,

    /// Gross rent.
    pub gross_rent: Option<f64>,
}

impl HousingRecord {
    /// Required header columns of the housing CSV.
    pub const REQUIRED_COLUMNS: [&'static str; 5] = [
        YEAR,
        NEIGHBORHOOD,
        "sale_price_sqr_foot",
        "housing_units",
        "gross_rent",
    ];

    /// Create a new record.
    pub fn new(
        year: i32,
        neighborhood: impl Into<String>,
        sale_price_sqr_foot: Option<f64>,
        housing_units: Option<f64>,
        gross_rent: Option<f64>,
    ) -> Self {
        Self {
            year,
            neighborhood: neighborhood.into(),
            sale_price_sqr_foot,
            housing_units,
            gross_rent,
        }
    }

    /// Replaces non-finite numeric values with null.
    pub(crate) fn normalized(mut self) -> Self {
        self.sale_price_sqr_foot = self.sale_price_sqr_foot.filter(|v| v.is_finite());
        self.housing_units = self.housing_units.filter(|v| v.is_finite());
        self.gross_rent = self.gross_rent.filter(|v| v.is_finite());
        self
    }
}

/// One row of the neighborhood coordinate lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodLocation {
    /// Neighborhood name (source header `Neighborhood`).
    #[serde(rename = "Neighborhood")]
    pub neighborhood: String,

    /// Latitude.
    #[serde(rename = "Lat")]
    pub lat: f64,

    /// Longitude.
    #[serde(rename = "Lon")]
    pub lon: f64,
}

impl NeighborhoodLocation {
    /// Required header columns of the coordinates CSV.
    pub const REQUIRED_COLUMNS: [&'static str; 3] = ["Neighborhood", LAT, LON];

    /// Create a new location.
    pub fn new(neighborhood: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            neighborhood: neighborhood.into(),
            lat,
            lon,
        }
    }
}
