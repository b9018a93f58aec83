//! Housing Units Per Year
//!
//! Mean housing units by year. Alongside the table it suggests a y-axis
//! range padded by one standard deviation of the yearly means, so the bars
//! do not start at zero and small year-to-year changes stay visible.

use super::mean::yearly_mean;
use crate::error::Result;
use crate::table::{AggregateTable, AxisRange};
use crate::traits::Aggregation;
use sfhousing_data::{DataContext, NumericField};
use tracing::debug;

/// Yearly mean housing units with an advisory display range.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearlyHousingUnits;

impl Aggregation for YearlyHousingUnits {
    fn name(&self) -> &str {
        "housing_units_per_year"
    }

    fn required_columns(&self) -> &[&str] {
        &["year", "housing_units"]
    }

    fn aggregate(&self, ctx: &DataContext) -> Result<AggregateTable> {
        let field = NumericField::HousingUnits;
        let frame = yearly_mean(ctx.housing_lazy(), field).collect()?;
        let range = AxisRange::padded_by_std(&frame, field.column())?;
        debug!(years = frame.height(), ?range, "computed housing units per year");

        Ok(AggregateTable::new(frame).with_display_range(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{empty_context, example_context};
    use approx::assert_relative_eq;

    #[test]
    fn test_one_row_per_year() {
        let table = YearlyHousingUnits.aggregate(&example_context()).unwrap();
        assert_eq!(table.i32_values("year").unwrap(), vec![Some(2012), Some(2013)]);

        let units = table.f64_values("housing_units").unwrap();
        assert_relative_eq!(units[0].unwrap(), 750.0);
        assert_relative_eq!(units[1].unwrap(), 1000.0);
    }

    #[test]
    fn test_display_range_padded_by_std() {
        let table = YearlyHousingUnits.aggregate(&example_context()).unwrap();
        let range = table.display_range().unwrap();
        // yearly means 750 and 1000: sample std is 250 / sqrt(2)
        let std = 176.776_695_297;

        assert_relative_eq!(range.min, 750.0 - std, epsilon = 1e-6);
        assert_relative_eq!(range.max, 1000.0 + std, epsilon = 1e-6);
    }

    #[test]
    fn test_range_does_not_filter_rows() {
        let table = YearlyHousingUnits.aggregate(&example_context()).unwrap();
        let range = table.display_range().unwrap();
        for value in table.f64_values("housing_units").unwrap().into_iter().flatten() {
            assert!(value >= range.min && value <= range.max);
        }
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn test_empty_dataset_has_no_range() {
        let table = YearlyHousingUnits.aggregate(&empty_context()).unwrap();
        assert!(table.is_empty());
        assert!(table.display_range().is_none());
    }
}
