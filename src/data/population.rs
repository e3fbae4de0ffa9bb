use std::{fs, path::Path};

use geojson::GeoJson;

use crate::error::DataLoadError;

/// Property holding the 2005 population estimate of a country.
pub const POPULATION_KEY: &str = "POP2005";

/// A country polygon as read from GeoJSON, together with its population.
#[derive(Debug, Clone)]
pub struct PopulationFeature {
    /// The source feature, geometry and properties untouched.
    pub feature: geojson::Feature,
    pub population: u64,
}

/// Read every feature of a GeoJSON FeatureCollection.
///
/// Each feature must carry a non-negative integer [`POPULATION_KEY`] property.
pub fn load_population_features(path: &Path) -> Result<Vec<PopulationFeature>, DataLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    // The world borders dataset is saved as UTF-8 with a byte order mark.
    let geojson: GeoJson = contents
        .trim_start_matches('\u{feff}')
        .parse()
        .map_err(|source| DataLoadError::MalformedGeoJson {
            path: path.to_path_buf(),
            source,
        })?;
    let collection = match geojson {
        GeoJson::FeatureCollection(collection) => collection,
        _ => {
            return Err(DataLoadError::NotAFeatureCollection {
                path: path.to_path_buf(),
            })
        }
    };

    let features = collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| -> Result<PopulationFeature, DataLoadError> {
            let population = feature
                .properties
                .as_ref()
                .and_then(|properties| properties.get(POPULATION_KEY))
                .and_then(|value| value.as_u64())
                .ok_or_else(|| DataLoadError::MissingProperty {
                    path: path.to_path_buf(),
                    index,
                    key: POPULATION_KEY,
                })?;
            Ok(PopulationFeature {
                feature,
                population,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("Read {} population features from {:?}", features.len(), path);
    Ok(features)
}
