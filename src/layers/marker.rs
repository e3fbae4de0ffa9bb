use rayon::prelude::*;

use crate::{
    data::volcano::VolcanoRecord,
    style::{color::volcano_color, escape::escape_html},
};

use super::layer::{CircleMarker, Layer, LayerContent, Popup};

pub const VOLCANO_LAYER_NAME: &str = "Volcanoes";
const MARKER_RADIUS_PX: u32 = 10;
const MARKER_OUTLINE_COLOR: &str = "grey";
const MARKER_FILL_OPACITY: f64 = 0.7;
const POPUP_MAX_WIDTH_PX: u32 = 500;

/// Popup listing elevation, name, type and status, in that order.
pub fn popup_html(record: &VolcanoRecord) -> String {
    format!(
        "{} m<br><br><b>Name: </b>{}<br><b>Type: </b>{}<br><b>Status: </b>{}",
        record.elevation,
        escape_html(&record.name),
        escape_html(&record.volcano_type),
        escape_html(&record.status)
    )
}

impl From<&VolcanoRecord> for CircleMarker {
    fn from(record: &VolcanoRecord) -> Self {
        Self {
            location: record.location(),
            radius: MARKER_RADIUS_PX,
            outline_color: MARKER_OUTLINE_COLOR.to_string(),
            fill: volcano_color(record.elevation),
            fill_opacity: MARKER_FILL_OPACITY,
            popup: Popup {
                html: popup_html(record),
                max_width: POPUP_MAX_WIDTH_PX,
            },
        }
    }
}

/// Build the clustered volcano layer, one marker per record in input order.
pub fn build_marker_cluster(records: &[VolcanoRecord]) -> Layer {
    let markers: Vec<CircleMarker> = records.par_iter().map(CircleMarker::from).collect();
    log::info!("Built {} volcano markers", markers.len());
    Layer {
        name: VOLCANO_LAYER_NAME.to_string(),
        visible_by_default: true,
        exclusive_with_siblings: false,
        content: LayerContent::MarkerCluster { markers },
    }
}
