use anyhow::Context;

use crate::{
    config::Config,
    data::{population::load_population_features, volcano::load_volcanoes},
    document::{
        compose::{compose, MapDocument},
        html::{serialize, write_document},
    },
    layers::{
        basemap::build_basemaps, choropleth::build_choropleth, marker::build_marker_cluster,
    },
    style::legend::{population_legend, volcano_legend},
};

/// Load both inputs and assemble the map document in memory.
pub fn build_document(config: &Config) -> anyhow::Result<MapDocument> {
    let volcanoes = load_volcanoes(&config.volcano_csv)
        .with_context(|| format!("Loading volcano data from {:?}", config.volcano_csv))?;
    let population_features = load_population_features(&config.population_geojson)
        .with_context(|| {
            format!(
                "Loading population data from {:?}",
                config.population_geojson
            )
        })?;

    Ok(compose(
        build_basemaps(),
        build_marker_cluster(&volcanoes),
        build_choropleth(&population_features),
        vec![volcano_legend(), population_legend()],
    ))
}

/// Render the map page. The output file is only touched once the whole document is ready.
pub fn render_map(config: &Config) -> anyhow::Result<()> {
    let document = build_document(config)?;
    let html = serialize(&document).context("Serializing map document")?;
    write_document(&html, &config.output_path)
        .with_context(|| format!("Writing map to {:?}", config.output_path))?;
    log::info!("Map written to {:?}", config.output_path);
    Ok(())
}
