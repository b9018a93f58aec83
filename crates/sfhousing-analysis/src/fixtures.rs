//! Shared test datasets.

use sfhousing_data::{DataContext, HousingRecord, NeighborhoodLocation};

/// Three records: A in 2012 and 2013, B in 2012.
pub(crate) fn example_context() -> DataContext {
    DataContext::new(
        vec![
            HousingRecord::new(2012, "A", Some(400.0), Some(1000.0), Some(1200.0)),
            HousingRecord::new(2013, "A", Some(420.0), Some(1000.0), Some(1250.0)),
            HousingRecord::new(2012, "B", Some(800.0), Some(500.0), Some(2000.0)),
        ],
        None,
    )
    .unwrap()
}

/// Records with null values, including a year whose prices are all null.
pub(crate) fn sparse_context() -> DataContext {
    DataContext::new(
        vec![
            HousingRecord::new(2010, "X", Some(300.0), Some(100.0), Some(1000.0)),
            HousingRecord::new(2010, "Y", None, Some(200.0), Some(1100.0)),
            HousingRecord::new(2011, "X", None, Some(100.0), Some(1200.0)),
            HousingRecord::new(2011, "Y", None, None, Some(1300.0)),
            HousingRecord::new(2012, "X", Some(500.0), Some(150.0), None),
        ],
        None,
    )
    .unwrap()
}

/// Housing dataset with no rows.
pub(crate) fn empty_context() -> DataContext {
    DataContext::new(Vec::new(), None).unwrap()
}

/// Two years of four neighborhoods plus a coordinate table.
///
/// Alpha has two records in 2010, so its mean of yearly means (400) differs
/// from its flat mean (333.3). Beta and Gamma tie at 250. " Delta " only
/// matches its location after trimming. Gamma has no coordinates and Epsilon
/// has no housing records.
pub(crate) fn city_context() -> DataContext {
    let records = vec![
        HousingRecord::new(2010, "Alpha", Some(100.0), Some(10.0), Some(1000.0)),
        HousingRecord::new(2010, "Alpha", Some(300.0), Some(30.0), Some(1200.0)),
        HousingRecord::new(2010, "Beta", Some(250.0), Some(20.0), Some(1500.0)),
        HousingRecord::new(2010, "Gamma", Some(400.0), Some(40.0), Some(2000.0)),
        HousingRecord::new(2010, " Delta ", Some(50.0), Some(5.0), Some(800.0)),
        HousingRecord::new(2011, "Alpha", Some(600.0), Some(20.0), Some(1400.0)),
        HousingRecord::new(2011, "Beta", Some(250.0), Some(20.0), Some(1500.0)),
        HousingRecord::new(2011, "Gamma", Some(100.0), Some(40.0), Some(2100.0)),
        HousingRecord::new(2011, " Delta ", Some(50.0), Some(5.0), Some(900.0)),
    ];
    let locations = vec![
        NeighborhoodLocation::new("Alpha", 37.80, -122.40),
        NeighborhoodLocation::new("Beta ", 37.76, -122.42),
        NeighborhoodLocation::new(" Delta", 37.73, -122.45),
        NeighborhoodLocation::new("Epsilon", 37.70, -122.48),
    ];

    DataContext::new(records, Some(locations)).unwrap()
}
