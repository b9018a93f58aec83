//! Aggregate tables handed to the chart layer.

use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suggested axis bounds for a chart. Advisory only, never used to filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AxisRange {
    /// Create a new axis range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range `[min - std, max + std]` over a numeric column of `frame`,
    /// using the sample standard deviation (n - 1 denominator).
    ///
    /// Nulls are ignored. Returns `None` when the column has no values. A
    /// single value gets no padding.
    pub fn padded_by_std(frame: &DataFrame, column: &str) -> Result<Option<Self>> {
        let stats = frame
            .clone()
            .lazy()
            .select([
                col(column).cast(DataType::Float64).min().alias("min"),
                col(column).cast(DataType::Float64).max().alias("max"),
                col(column).cast(DataType::Float64).std(1).alias("std"),
            ])
            .collect()?;

        let stat = |name: &str| -> Result<Option<f64>> {
            Ok(stats.column(name)?.f64()?.get(0))
        };

        let (Some(min), Some(max)) = (stat("min")?, stat("max")?) else {
            return Ok(None);
        };
        let pad = stat("std")?.filter(|s| s.is_finite()).unwrap_or(0.0);

        Ok(Some(Self::new(min - pad, max + pad)))
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.min, self.max)
    }
}

/// A derived table produced by grouping and reducing the housing dataset.
///
/// Recomputed for every request. An empty frame is a valid result and means
/// "nothing to plot".
#[derive(Debug, Clone)]
pub struct AggregateTable {
    frame: DataFrame,
    display_range: Option<AxisRange>,
}

impl AggregateTable {
    /// Wrap an aggregated frame.
    pub const fn new(frame: DataFrame) -> Self {
        Self {
            frame,
            display_range: None,
        }
    }

    /// Attach an advisory display range.
    pub fn with_display_range(mut self, range: Option<AxisRange>) -> Self {
        self.display_range = range;
        self
    }

    /// The underlying frame.
    pub const fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Consume the table, returning the frame.
    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    /// Advisory axis range, if the analysis computes one.
    pub const fn display_range(&self) -> Option<AxisRange> {
        self.display_range
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Values of a numeric column as `f64`, nulls preserved.
    pub fn f64_values(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let column = self.frame.column(name)?.cast(&DataType::Float64)?;
        let values = column.f64()?.into_iter().collect();
        Ok(values)
    }

    /// Values of an integer column as `i32`, nulls preserved.
    pub fn i32_values(&self, name: &str) -> Result<Vec<Option<i32>>> {
        let column = self.frame.column(name)?.cast(&DataType::Int32)?;
        let values = column.i32()?.into_iter().collect();
        Ok(values)
    }

    /// Values of a string column, nulls preserved.
    pub fn str_values(&self, name: &str) -> Result<Vec<Option<String>>> {
        let values = self
            .frame
            .column(name)?
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect();
        Ok(values)
    }
}
