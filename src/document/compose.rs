use serde::Serialize;

use crate::{layers::layer::Layer, style::legend::Legend};

pub const MAP_TITLE: &str = "Volcano Map";
/// One copy of the world fits the viewport at this zoom.
pub const WORLD_MIN_ZOOM: u8 = 1;

/// Initial camera and the limits the viewer may move within.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// `[lat, lon]`.
    pub center: [f64; 2],
    pub zoom: u8,
    pub min_zoom: u8,
    /// `[[south, west], [north, east]]`.
    pub max_bounds: [[f64; 2]; 2],
    /// 1.0 stops panning hard at the bounds.
    pub max_bounds_viscosity: f64,
    pub world_copy_jump: bool,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            zoom: 2,
            min_zoom: WORLD_MIN_ZOOM,
            max_bounds: [[-90.0, -180.0], [90.0, 180.0]],
            max_bounds_viscosity: 1.0,
            world_copy_jump: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleInput {
    /// Selecting the layer deselects its exclusive siblings.
    Radio,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleEntry {
    pub layer: String,
    pub input: ToggleInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawShape {
    Rectangle,
    Polygon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    LayerToggle { entries: Vec<ToggleEntry> },
    /// Only the listed shapes can be drawn.
    Draw {
        shapes: Vec<DrawShape>,
        edit: bool,
        export: bool,
    },
    Fullscreen,
    /// Asks the browser for the viewer's position and centers the map on it.
    Locate,
    Scale,
}

/// Everything the generated page shows. Built once by [`compose`] and then serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDocument {
    pub title: String,
    pub view: MapView,
    /// Drawing order, bottom first.
    pub layers: Vec<Layer>,
    pub controls: Vec<Control>,
    pub legends: Vec<Legend>,
}

impl MapDocument {
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }
}

fn layer_toggle(layers: &[Layer]) -> Control {
    let entries = layers
        .iter()
        .map(|layer| ToggleEntry {
            layer: layer.name.clone(),
            input: if layer.exclusive_with_siblings {
                ToggleInput::Radio
            } else {
                ToggleInput::Checkbox
            },
        })
        .collect();
    Control::LayerToggle { entries }
}

/// Assemble basemaps, overlays, controls and legends into one document.
pub fn compose(
    basemaps: Vec<Layer>,
    marker_layer: Layer,
    choropleth_layer: Layer,
    legends: Vec<Legend>,
) -> MapDocument {
    let mut layers = basemaps;
    layers.push(marker_layer);
    layers.push(choropleth_layer);

    let controls = vec![
        layer_toggle(&layers),
        Control::Draw {
            shapes: vec![DrawShape::Rectangle, DrawShape::Polygon],
            edit: false,
            export: false,
        },
        Control::Fullscreen,
        Control::Locate,
        Control::Scale,
    ];
    log::debug!(
        "Composed map with {} layers, {} controls and {} legends",
        layers.len(),
        controls.len(),
        legends.len()
    );

    MapDocument {
        title: MAP_TITLE.to_string(),
        view: MapView::default(),
        layers,
        controls,
        legends,
    }
}
