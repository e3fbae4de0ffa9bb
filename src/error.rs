use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure to turn an input file into records. Rows and features are never skipped, the
/// first bad one aborts the load.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("could not read {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },
    /// `row` counts data rows from 1, row 0 is the header.
    #[error("{path:?} row {row} is malformed: {reason}")]
    MalformedRow {
        path: PathBuf,
        row: usize,
        reason: String,
    },
    #[error("{path:?} is not valid GeoJSON")]
    MalformedGeoJson {
        path: PathBuf,
        #[source]
        source: geojson::Error,
    },
    #[error("{path:?} is not a GeoJSON FeatureCollection")]
    NotAFeatureCollection { path: PathBuf },
    #[error("{path:?} feature {index} has no non-negative integer '{key}' property")]
    MissingProperty {
        path: PathBuf,
        index: usize,
        key: &'static str,
    },
}

#[derive(Debug, Error)]
#[error("could not write map document to {path:?}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
