use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use super::model::{Measurement, MeasurementTable, NAME_COLUMN, VALUE_COLUMN};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every file in order and concatenate them into one table.
///
/// Fails on the first unreadable file; an all-empty result is an error too,
/// since none of the statistics are defined without measurements.
pub fn load_measurements<P: AsRef<Path>>(paths: &[P]) -> Result<MeasurementTable, LoadError> {
    let mut combined = MeasurementTable::default();
    for path in paths {
        let table = load_csv(path.as_ref())?;
        log::info!(
            "Loaded {} measurements from {}",
            table.len(),
            path.as_ref().display()
        );
        combined = combined.concat(table);
    }

    if combined.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(combined)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// The two columns the analysis needs; anything else is kept as raw text.
#[derive(Debug, Deserialize)]
struct RequiredColumns {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Value")]
    value: String,
}

/// CSV layout: header row with at least `Name` and `Value`.
/// Extra columns are carried along in [`Measurement::cells`].
pub fn load_csv(path: &Path) -> Result<MeasurementTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers().map_err(csv_err)?.clone();

    for column in [NAME_COLUMN, VALUE_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(csv_err)?;
        let required: RequiredColumns = record.deserialize(Some(&headers)).map_err(csv_err)?;

        let value = required
            .value
            .trim()
            .parse::<f64>()
            .map_err(|_| LoadError::InvalidValue {
                path: path.to_path_buf(),
                row: row_no,
                value: required.value.clone(),
            })?;

        let cells: BTreeMap<String, String> = columns
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();

        rows.push(Measurement {
            name: required.name,
            value,
            cells,
        });
    }

    Ok(MeasurementTable::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_and_concatenates_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_csv(&dir, "meting1.csv", "Name,Value\na,0.4\nb,0.6\n");
        let second = write_csv(&dir, "meting2.csv", "Name,Value\nc,0.65\nd,0.55\n");

        let table = load_measurements(&[first, second]).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.values(), vec![0.4, 0.6, 0.65, 0.55]);
        assert_eq!(table.rows[3].name, "d");
    }

    #[test]
    fn keeps_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "m.csv", "Plate,Name,Value\nP1,a,0.41\n");

        let table = load_csv(&path).unwrap();
        assert_eq!(table.columns, ["Plate", "Name", "Value"]);
        assert_eq!(table.rows[0].cells["Plate"], "P1");
        assert_eq!(table.rows[0].value, 0.41);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn missing_value_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "m.csv", "Name,Diameter\na,0.4\n");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn {
                column: "Value",
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "m.csv", "Name,Value\na,0.4\nb,wide\n");
        match load_csv(&path).unwrap_err() {
            LoadError::InvalidValue { row, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(value, "wide");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_row_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "m.csv", "Name,Value\na,0.4,extra\n");
        assert!(matches!(load_csv(&path).unwrap_err(), LoadError::Csv { .. }));
    }

    #[test]
    fn header_only_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_csv(&dir, "a.csv", "Name,Value\n");
        let second = write_csv(&dir, "b.csv", "Name,Value\n");
        assert!(matches!(
            load_measurements(&[first, second]).unwrap_err(),
            LoadError::Empty
        ));
    }
}
