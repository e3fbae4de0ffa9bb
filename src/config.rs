use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Optional configuration file, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "volcano_map.yaml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub volcano_csv: PathBuf,
    pub population_geojson: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            volcano_csv: PathBuf::from("data/(1569)volcano.csv"),
            population_geojson: PathBuf::from("data/world.json"),
            output_path: PathBuf::from("index.html"),
        }
    }
}

impl Config {
    /// Read [`CONFIG_FILENAME`] from the working directory, or fall back to the defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_default(Path::new(CONFIG_FILENAME))
    }

    pub fn load_or_default(config_filepath: &Path) -> anyhow::Result<Self> {
        if !config_filepath.exists() {
            log::info!(
                "No config file at {:?}, using default paths",
                config_filepath
            );
            return Ok(Self::default());
        }
        log::info!("Reading config from {:?}", config_filepath);
        let config_contents = read_to_string(config_filepath)
            .with_context(|| format!("Reading config file {:?}", config_filepath))?;
        serde_yaml::from_str(&config_contents)
            .with_context(|| format!("Parsing config file {:?}", config_filepath))
    }
}
