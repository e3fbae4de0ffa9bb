use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::DataLoadError;

/// Columns the volcano table must provide. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Latitude",
    "Longitude",
    "Elev",
    "Volcano Name",
    "Status",
    "Type",
];

/// One row of the volcano table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolcanoRecord {
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// Meters above sea level, negative for submarine volcanoes.
    #[serde(rename = "Elev")]
    pub elevation: f64,
    #[serde(rename = "Volcano Name")]
    pub name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Type")]
    pub volcano_type: String,
}

impl VolcanoRecord {
    pub fn location(&self) -> geo::Point {
        geo::Point::new(self.longitude, self.latitude)
    }
}

/// Read every volcano from a comma-separated file with a header row.
///
/// # Arguments
/// * path - the CSV file. Must contain all of [`REQUIRED_COLUMNS`].
///
/// # Returns
/// One record per data row, in file order. Fails on the first row that cannot be read, so a
/// successful load never silently drops volcanoes.
pub fn load_volcanoes(path: &Path) -> Result<Vec<VolcanoRecord>, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|err| DataLoadError::MalformedRow {
            path: path.to_path_buf(),
            row: 0,
            reason: err.to_string(),
        })?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DataLoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<VolcanoRecord>().enumerate() {
        let row = index + 1;
        let record = result.map_err(|err| DataLoadError::MalformedRow {
            path: path.to_path_buf(),
            row,
            reason: err.to_string(),
        })?;
        if !(record.latitude.is_finite()
            && record.longitude.is_finite()
            && record.elevation.is_finite())
        {
            return Err(DataLoadError::MalformedRow {
                path: path.to_path_buf(),
                row,
                reason: "latitude, longitude and elevation must be finite numbers".to_string(),
            });
        }
        records.push(record);
    }
    log::info!("Read {} volcanoes from {:?}", records.len(), path);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use testdir::testdir;

    use crate::error::DataLoadError;

    use super::{load_volcanoes, VolcanoRecord};

    fn record(latitude: f64, longitude: f64, elevation: f64, name: &str) -> VolcanoRecord {
        VolcanoRecord {
            latitude,
            longitude,
            elevation,
            name: name.to_string(),
            status: "Historical".to_string(),
            volcano_type: "Stratovolcano".to_string(),
        }
    }

    #[test]
    fn test_load_volcanoes_round_trip() {
        let records = vec![
            record(48.7767982, -121.8109970, 3285.0, "Baker"),
            record(46.2000008, -122.1800003, 2549.0, "St. Helens"),
            record(19.4209995, -155.2870026, 1222.0, "Kilauea"),
            // Duplicates are kept as separate volcanoes.
            record(19.4209995, -155.2870026, 1222.0, "Kilauea"),
        ];
        let filepath = testdir!().join("volcanoes.csv");
        let mut writer = csv::Writer::from_path(&filepath).unwrap();
        for record in &records {
            writer.serialize(record).unwrap();
        }
        writer.flush().unwrap();

        let loaded = load_volcanoes(&filepath).unwrap();
        assert_eq!(records.len(), loaded.len());
        for (expected, actual) in records.iter().zip(&loaded) {
            assert_abs_diff_eq!(expected.latitude, actual.latitude, epsilon = 1e-9);
            assert_abs_diff_eq!(expected.longitude, actual.longitude, epsilon = 1e-9);
            assert_abs_diff_eq!(expected.elevation, actual.elevation, epsilon = 1e-9);
            assert_eq!(expected.name, actual.name);
            assert_eq!(expected.status, actual.status);
            assert_eq!(expected.volcano_type, actual.volcano_type);
        }
    }

    #[test]
    fn test_load_volcanoes_ignores_extra_columns_and_bom() {
        let filepath = testdir!().join("volcanoes.csv");
        fs::write(
            &filepath,
            "\u{feff}Number,Volcano Name,Country,Latitude,Longitude,Elev,Type,Status\n\
             1201-01,Baker,United States, 48.7767982 ,-121.8109970,3285,Stratovolcano,Historical\n",
        )
        .unwrap();

        let loaded = load_volcanoes(&filepath).unwrap();
        assert_eq!(
            vec![VolcanoRecord {
                latitude: 48.7767982,
                longitude: -121.8109970,
                elevation: 3285.0,
                name: "Baker".to_string(),
                status: "Historical".to_string(),
                volcano_type: "Stratovolcano".to_string(),
            }],
            loaded
        );
        assert_eq!(geo::Point::new(-121.8109970, 48.7767982), loaded[0].location());
    }

    #[rstest]
    #[case("Latitude,Longitude,Volcano Name,Status,Type\n1,2,A,B,C\n", "Elev")]
    #[case("Latitude,Elev,Volcano Name,Status,Type\n1,2,A,B,C\n", "Longitude")]
    #[case("Latitude,Longitude,Elev,Status,Type\n1,2,3,B,C\n", "Volcano Name")]
    fn test_load_volcanoes_missing_column(#[case] contents: &str, #[case] expected_column: &str) {
        let filepath = testdir!().join("volcanoes.csv");
        fs::write(&filepath, contents).unwrap();

        match load_volcanoes(&filepath) {
            Err(DataLoadError::MissingColumn { column, path }) => {
                assert_eq!(expected_column, column);
                assert_eq!(filepath, path);
            }
            other => panic!("Expected a missing column error, got {:?}", other),
        }
    }

    #[rstest]
    #[case("1,2,3,A,B,C\nnorth,2,3,A,B,C\n", 2)] // Non-numeric latitude.
    #[case("1,2,,A,B,C\n", 1)] // Empty elevation.
    #[case("1,2,3,A,B,C\n1,2,3,A,B,C\n1,2,NaN,A,B,C\n", 3)]
    fn test_load_volcanoes_malformed_row(#[case] rows: &str, #[case] expected_row: usize) {
        let filepath = testdir!().join("volcanoes.csv");
        fs::write(
            &filepath,
            format!("Latitude,Longitude,Elev,Volcano Name,Status,Type\n{rows}"),
        )
        .unwrap();

        match load_volcanoes(&filepath) {
            Err(DataLoadError::MalformedRow { row, .. }) => assert_eq!(expected_row, row),
            other => panic!("Expected a malformed row error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_volcanoes_missing_file() {
        let filepath = testdir!().join("does_not_exist.csv");
        assert!(matches!(
            load_volcanoes(&filepath),
            Err(DataLoadError::Open { .. })
        ));
    }
}
