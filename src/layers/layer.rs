use serde::{Serialize, Serializer};

use crate::style::color::ColorBucket;

/// A named group of map content the viewer can toggle as a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub name: String,
    pub visible_by_default: bool,
    /// Set for basemaps: showing one hides the others. Overlays toggle independently.
    pub exclusive_with_siblings: bool,
    #[serde(flatten)]
    pub content: LayerContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerContent {
    Tiles(TileSource),
    MarkerCluster {
        markers: Vec<CircleMarker>,
    },
    Choropleth {
        features: geojson::FeatureCollection,
        style: ChoroplethStyle,
    },
}

/// Remote XYZ tile service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileSource {
    /// URL template with `{x}`, `{y}` and `{z}` placeholders.
    pub url: String,
    pub attribution: String,
    pub min_zoom: u8,
    pub max_zoom: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    #[serde(serialize_with = "serialize_lat_lon")]
    pub location: geo::Point,
    /// Pixels, independent of zoom.
    pub radius: u32,
    pub outline_color: String,
    pub fill: ColorBucket,
    pub fill_opacity: f64,
    pub popup: Popup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    /// Trusted HTML, any user text in it is already escaped.
    pub html: String,
    pub max_width: u32,
}

/// Outline styling shared by every polygon of a choropleth. The fill comes from each feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethStyle {
    pub outline_color: String,
    pub outline_weight: f64,
    pub fill_opacity: f64,
}

impl Default for ChoroplethStyle {
    fn default() -> Self {
        Self {
            outline_color: "#3388ff".to_string(),
            outline_weight: 1.0,
            fill_opacity: 0.6,
        }
    }
}

/// Leaflet expects `[lat, lon]` while geo points are `(x = lon, y = lat)`.
fn serialize_lat_lon<S: Serializer>(point: &geo::Point, serializer: S) -> Result<S::Ok, S::Error> {
    [point.y(), point.x()].serialize(serializer)
}

impl Layer {
    pub fn is_basemap(&self) -> bool {
        matches!(self.content, LayerContent::Tiles(_))
    }

    /// Markers of a marker cluster layer, empty for any other layer.
    pub fn markers(&self) -> &[CircleMarker] {
        match &self.content {
            LayerContent::MarkerCluster { markers } => markers,
            _ => &[],
        }
    }

    /// Features of a choropleth layer, empty for any other layer.
    pub fn choropleth_features(&self) -> &[geojson::Feature] {
        match &self.content {
            LayerContent::Choropleth { features, .. } => &features.features,
            _ => &[],
        }
    }
}
