//! CSV Data Loader Module
//! Loads the launch-records CSV into a [`LaunchTable`] using Polars.

use polars::prelude::*;
use thiserror::Error;

use super::table::{LaunchRecord, LaunchTable};

/// Required CSV columns, matching the source dataset's headers.
pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_SUCCESS: &str = "class";
pub const COL_BOOSTER_VERSION: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 5] = [
    COL_FLIGHT_NUMBER,
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_SUCCESS,
    COL_BOOSTER_VERSION,
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("No launch records in dataset")]
    NoData,
}

/// Load the launch dataset from a CSV file.
///
/// Any failure here is startup-fatal; the table is never reloaded.
pub fn load_csv(file_path: &str) -> Result<LaunchTable, LoaderError> {
    let df = LazyCsvReader::new(file_path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    from_dataframe(&df)
}

/// Materialize typed launch records from a Polars DataFrame.
pub fn from_dataframe(df: &DataFrame) -> Result<LaunchTable, LoaderError> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for required in REQUIRED_COLUMNS {
        if !column_names.iter().any(|c| c == required) {
            return Err(LoaderError::MissingColumn(required.to_string()));
        }
    }

    let flight_col = df.column(COL_FLIGHT_NUMBER)?.cast(&DataType::Int64)?;
    let flights = flight_col.i64()?;
    let payload_col = df.column(COL_PAYLOAD_MASS)?.cast(&DataType::Float64)?;
    let payloads = payload_col.f64()?;
    let success_col = df.column(COL_SUCCESS)?.cast(&DataType::Int64)?;
    let successes = success_col.i64()?;
    let site_col = df.column(COL_LAUNCH_SITE)?;
    let booster_col = df.column(COL_BOOSTER_VERSION)?;

    let mut records = Vec::with_capacity(df.height());
    let mut skipped = 0usize;

    for i in 0..df.height() {
        let flight = flights.get(i);
        let payload = payloads.get(i);
        let success = successes.get(i);
        let site = site_col.get(i).ok().filter(|v| !v.is_null());
        let booster = booster_col.get(i).ok().filter(|v| !v.is_null());

        match (flight, payload, success, site, booster) {
            (Some(flight), Some(payload), Some(success), Some(site), Some(booster))
                if !payload.is_nan() =>
            {
                records.push(LaunchRecord {
                    flight_number: flight as u32,
                    site: site.to_string().trim_matches('"').to_string(),
                    payload_mass_kg: payload,
                    success: success != 0,
                    booster_version: booster.to_string().trim_matches('"').to_string(),
                });
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} rows with missing fields", skipped);
    }
    if records.is_empty() {
        return Err(LoaderError::NoData);
    }

    Ok(LaunchTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        df!(
            COL_FLIGHT_NUMBER => [1i64, 2, 3],
            COL_LAUNCH_SITE => ["CCAFS LC-40", "KSC LC-39A", "CCAFS LC-40"],
            COL_PAYLOAD_MASS => [500.0, 4200.0, 9600.0],
            COL_SUCCESS => [0i64, 1, 1],
            COL_BOOSTER_VERSION => ["v1.0", "FT", "B4"],
        )
        .unwrap()
    }

    #[test]
    fn materializes_typed_records() {
        let table = from_dataframe(&sample_frame()).unwrap();
        assert_eq!(table.len(), 3);

        let first = &table.records()[0];
        assert_eq!(first.flight_number, 1);
        assert_eq!(first.site, "CCAFS LC-40");
        assert_eq!(first.payload_mass_kg, 500.0);
        assert!(!first.success);
        assert_eq!(first.booster_version, "v1.0");

        assert_eq!(table.sites(), ["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(table.payload_bounds(), (500.0, 9600.0));
    }

    #[test]
    fn missing_column_is_an_error() {
        let df = df!(
            COL_FLIGHT_NUMBER => [1i64],
            COL_LAUNCH_SITE => ["CCAFS LC-40"],
            COL_PAYLOAD_MASS => [500.0],
            COL_SUCCESS => [1i64],
        )
        .unwrap();

        match from_dataframe(&df) {
            Err(LoaderError::MissingColumn(col)) => assert_eq!(col, COL_BOOSTER_VERSION),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn empty_frame_is_an_error() {
        let df = df!(
            COL_FLIGHT_NUMBER => Vec::<i64>::new(),
            COL_LAUNCH_SITE => Vec::<String>::new(),
            COL_PAYLOAD_MASS => Vec::<f64>::new(),
            COL_SUCCESS => Vec::<i64>::new(),
            COL_BOOSTER_VERSION => Vec::<String>::new(),
        )
        .unwrap();

        assert!(matches!(from_dataframe(&df), Err(LoaderError::NoData)));
    }

    #[test]
    fn rows_with_missing_fields_are_skipped() {
        let df = df!(
            COL_FLIGHT_NUMBER => [Some(1i64), Some(2)],
            COL_LAUNCH_SITE => [Some("CCAFS LC-40"), Some("KSC LC-39A")],
            COL_PAYLOAD_MASS => [Some(500.0), None],
            COL_SUCCESS => [Some(1i64), Some(1)],
            COL_BOOSTER_VERSION => [Some("v1.0"), Some("FT")],
        )
        .unwrap();

        let table = from_dataframe(&df).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].site, "CCAFS LC-40");
    }
}
