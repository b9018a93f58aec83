//! Per-year aggregations over the whole city.

pub mod housing_units;
pub mod mean;

pub use housing_units::YearlyHousingUnits;
pub use mean::YearlyMean;
