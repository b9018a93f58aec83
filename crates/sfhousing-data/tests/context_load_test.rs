//! Integration tests for loading the census tables into a data context.

use rstest::rstest;
use sfhousing_data::loader::{read_housing, read_locations};
use sfhousing_data::{DataContext, DataError};
use std::path::Path;

const HOUSING_CSV: &str = "\
year,neighborhood,sale_price_sqr_foot,housing_units,gross_rent
2010,Alamo Square,291.18,372560,1239
2010,Anza Vista,267.93,372560,1239
2011,Alamo Square,272.53,374507,1530
2011,Bayview,,374507,1530
";

const LOCATIONS_CSV: &str = "\
Neighborhood,Lat,Lon
Alamo Square,37.791012,-122.4021
Anza Vista,37.779598,-122.443451
";

#[test]
fn test_context_from_csv_sources() {
    let records = read_housing(HOUSING_CSV.as_bytes()).unwrap();
    let locations = read_locations(LOCATIONS_CSV.as_bytes()).unwrap();
    let ctx = DataContext::new(records, Some(locations)).unwrap();

    assert_eq!(ctx.len(), 4);
    assert_eq!(ctx.years(), &[2010, 2011]);
    assert_eq!(
        ctx.neighborhoods(),
        &[
            "Alamo Square".to_string(),
            "Anza Vista".to_string(),
            "Bayview".to_string()
        ]
    );
    assert_eq!(ctx.locations().unwrap().height(), 2);

    let prices = ctx.housing().column("sale_price_sqr_foot").unwrap();
    assert_eq!(prices.null_count(), 1);
}

#[rstest]
#[case("year,neighborhood,housing_units,gross_rent\n", "sale_price_sqr_foot")]
#[case("neighborhood,sale_price_sqr_foot,housing_units,gross_rent\n", "year")]
#[case("year,sale_price_sqr_foot,housing_units,gross_rent\n", "neighborhood")]
fn test_missing_housing_column_is_fatal(#[case] csv: &str, #[case] expected: &str) {
    match read_housing(csv.as_bytes()) {
        Err(DataError::MissingColumn { column, .. }) => assert_eq!(column, expected),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_missing_location_column_is_fatal() {
    let csv = "Neighborhood,Lat\nAlamo Square,37.79\n";
    assert!(matches!(
        read_locations(csv.as_bytes()),
        Err(DataError::MissingColumn { .. })
    ));
}

#[test]
fn test_load_missing_file_is_fatal() {
    let result = DataContext::load(Path::new("no/such/housing.csv"), None);
    assert!(matches!(result, Err(DataError::Io { .. })));
}
