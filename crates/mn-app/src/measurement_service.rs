//! Loading measurements of metabolites from tab-separated files.
//!
//! A file has a header row naming a `reference` column and a `value`
//! column; other columns are ignored.

use std::path::Path;

use csv::ReaderBuilder;
use mn_sets::Measurement;

use crate::error::{AppError, AppResult};

pub fn load_measurements(path: &Path) -> AppResult<Vec<Measurement>> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::MeasurementsFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_measurements(&content)
}

pub fn parse_measurements(content: &str) -> AppResult<Vec<Measurement>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    let mut measurements = Vec::new();
    for (row, record) in reader.deserialize::<Measurement>().enumerate() {
        let measurement = record.map_err(|e| {
            AppError::Measurements(format!("Failed to parse measurement row {}: {}", row + 1, e))
        })?;
        measurements.push(measurement);
    }
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_columns() {
        let measurements =
            parse_measurements("name\treference\tvalue\npyruvate\t1060\t2.5\nlactate\t612\t0.75\n")
                .unwrap();
        assert_eq!(
            measurements,
            vec![Measurement::new("1060", 2.5), Measurement::new("612", 0.75)]
        );
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let err = parse_measurements("reference\tvalue\n1060\thigh\n").unwrap_err();
        assert!(matches!(err, AppError::Measurements(_)));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let path = std::env::temp_dir().join("mn_app_no_such_measurements.tsv");
        let err = load_measurements(&path).unwrap_err();
        assert!(matches!(err, AppError::MeasurementsFileRead { .. }));
    }
}
