//! Yearly Mean
//!
//! Groups the housing dataset by year and averages one numeric field.
//! Years are returned in ascending order.

use crate::error::Result;
use crate::table::AggregateTable;
use crate::traits::Aggregation;
use polars::prelude::*;
use sfhousing_data::DataContext;
use sfhousing_data::NumericField;
use sfhousing_data::record::YEAR;
use tracing::debug;

/// Mean of one numeric field per year.
#[derive(Debug, Clone, Copy)]
pub struct YearlyMean {
    field: NumericField,
}

impl YearlyMean {
    /// Create a yearly mean over `field`.
    pub const fn new(field: NumericField) -> Self {
        Self { field }
    }

    /// Yearly mean gross rent.
    pub const fn gross_rent() -> Self {
        Self::new(NumericField::GrossRent)
    }

    /// Yearly mean sale price per square foot.
    pub const fn sale_price() -> Self {
        Self::new(NumericField::SalePriceSqrFoot)
    }

    /// The reduced field.
    pub const fn field(&self) -> NumericField {
        self.field
    }
}

impl Aggregation for YearlyMean {
    fn name(&self) -> &str {
        match self.field {
            NumericField::SalePriceSqrFoot => "yearly_sale_price",
            NumericField::HousingUnits => "yearly_housing_units",
            NumericField::GrossRent => "yearly_gross_rent",
        }
    }

    fn required_columns(&self) -> &[&str] {
        match self.field {
            NumericField::SalePriceSqrFoot => &["year", "sale_price_sqr_foot"],
            NumericField::HousingUnits => &["year", "housing_units"],
            NumericField::GrossRent => &["year", "gross_rent"],
        }
    }

    fn aggregate(&self, ctx: &DataContext) -> Result<AggregateTable> {
        let frame = yearly_mean(ctx.housing_lazy(), self.field).collect()?;
        debug!(field = %self.field, years = frame.height(), "computed yearly mean");
        Ok(AggregateTable::new(frame))
    }
}

/// Group `data` by year and average `field`, ignoring nulls.
///
/// Returns a LazyFrame with columns: [year, <field>]
pub(crate) fn yearly_mean(data: LazyFrame, field: NumericField) -> LazyFrame {
    data.group_by_stable([col(YEAR)])
        .agg([col(field.column()).mean()])
        .sort([YEAR], SortMultipleOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{example_context, sparse_context};
    use approx::assert_relative_eq;

    #[test]
    fn test_names() {
        assert_eq!(YearlyMean::gross_rent().name(), "yearly_gross_rent");
        assert_eq!(YearlyMean::sale_price().name(), "yearly_sale_price");
        assert!(YearlyMean::gross_rent().required_columns().contains(&"gross_rent"));
    }

    #[test]
    fn test_yearly_gross_rent() {
        let table = YearlyMean::gross_rent().aggregate(&example_context()).unwrap();
        assert_eq!(table.column_names(), vec!["year", "gross_rent"]);
        assert_eq!(table.i32_values("year").unwrap(), vec![Some(2012), Some(2013)]);

        let rents = table.f64_values("gross_rent").unwrap();
        assert_relative_eq!(rents[0].unwrap(), 1600.0);
        assert_relative_eq!(rents[1].unwrap(), 1250.0);
    }

    #[test]
    fn test_yearly_sale_price() {
        let table = YearlyMean::sale_price().aggregate(&example_context()).unwrap();
        let prices = table.f64_values("sale_price_sqr_foot").unwrap();
        assert_relative_eq!(prices[0].unwrap(), 600.0);
        assert_relative_eq!(prices[1].unwrap(), 420.0);
    }

    #[test]
    fn test_nulls_are_ignored_and_all_null_year_is_null() {
        let table = YearlyMean::sale_price().aggregate(&sparse_context()).unwrap();
        assert_eq!(
            table.i32_values("year").unwrap(),
            vec![Some(2010), Some(2011), Some(2012)]
        );
        let prices = table.f64_values("sale_price_sqr_foot").unwrap();
        // 2010: one of two rows is null
        assert_relative_eq!(prices[0].unwrap(), 300.0);
        // 2011: every row is null
        assert_eq!(prices[1], None);
        assert_relative_eq!(prices[2].unwrap(), 500.0);
    }
}
