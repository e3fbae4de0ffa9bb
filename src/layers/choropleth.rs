use rayon::prelude::*;

use crate::{data::population::PopulationFeature, style::color::population_color};

use super::layer::{ChoroplethStyle, Layer, LayerContent};

pub const POPULATION_LAYER_NAME: &str = "Population";
/// Foreign member carrying the fill color of a feature, read by the page bootstrap.
pub const FILL_MEMBER: &str = "fill";

/// Copy the feature and attach its fill color next to, not inside, its properties.
fn styled_feature(population_feature: &PopulationFeature) -> geojson::Feature {
    let mut feature = population_feature.feature.clone();
    let fill = population_color(population_feature.population);
    feature
        .foreign_members
        .get_or_insert_with(geojson::JsonObject::new)
        .insert(
            FILL_MEMBER.to_string(),
            serde_json::Value::from(fill.css_color()),
        );
    feature
}

/// Build the population overlay. Hidden until the viewer switches it on.
pub fn build_choropleth(features: &[PopulationFeature]) -> Layer {
    let styled: Vec<geojson::Feature> = features.par_iter().map(styled_feature).collect();
    log::info!("Built population layer with {} features", styled.len());
    Layer {
        name: POPULATION_LAYER_NAME.to_string(),
        visible_by_default: false,
        exclusive_with_siblings: false,
        content: LayerContent::Choropleth {
            features: geojson::FeatureCollection {
                bbox: None,
                features: styled,
                foreign_members: None,
            },
            style: ChoroplethStyle::default(),
        },
    }
}
