//! CSV loading for the housing and coordinate tables.
//!
//! Header rows are validated before any record is deserialized, so a file
//! missing a required column fails with [`DataError::MissingColumn`] instead
//! of a per-row parse error. Columns not named by the record types are
//! ignored.

use crate::error::{DataError, Result};
use crate::record::{HousingRecord, NeighborhoodLocation};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Table label used in housing load errors.
pub const HOUSING_TABLE: &str = "housing census";

/// Table label used in location load errors.
pub const LOCATIONS_TABLE: &str = "neighborhood coordinates";

/// Read housing records from any CSV source.
pub fn read_housing<R: Read>(reader: R) -> Result<Vec<HousingRecord>> {
    let records: Vec<HousingRecord> =
        read_table(reader, HOUSING_TABLE, &HousingRecord::REQUIRED_COLUMNS)?;
    Ok(records
        .into_iter()
        .map(HousingRecord::normalized)
        .collect())
}

/// Load housing records from a CSV file.
pub fn load_housing(path: &Path) -> Result<Vec<HousingRecord>> {
    read_housing(open(path)?)
}

/// Read neighborhood locations from any CSV source.
pub fn read_locations<R: Read>(reader: R) -> Result<Vec<NeighborhoodLocation>> {
    read_table(reader, LOCATIONS_TABLE, &NeighborhoodLocation::REQUIRED_COLUMNS)
}

/// Load neighborhood locations from a CSV file.
pub fn load_locations(path: &Path) -> Result<Vec<NeighborhoodLocation>> {
    read_locations(open(path)?)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_table<T, R>(reader: R, table: &str, required: &[&str]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataError::MissingColumn {
                table: table.to_string(),
                column: (*column).to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<T>().enumerate() {
        let row = result.map_err(|e| DataError::MalformedRow {
            table: table.to_string(),
            row: idx + 1,
            reason: e.to_string(),
        })?;
        rows.push(row);
    }

    debug!(table, rows = rows.len(), "parsed csv table");
    Ok(rows)
}
