use super::layer::{Layer, LayerContent, TileSource};

/// Below this zoom the world repeats across the viewport and tiles render degenerately.
pub const BASEMAP_MIN_ZOOM: u8 = 2;
/// The default basemap also covers the map's own min zoom, so zooming out never blanks it.
pub const DEFAULT_BASEMAP_MIN_ZOOM: u8 = 1;

struct BasemapSpec {
    name: &'static str,
    url: &'static str,
    attribution: &'static str,
    min_zoom: u8,
    max_zoom: Option<u8>,
}

/// The first entry is shown when the page opens.
const BASEMAPS: [BasemapSpec; 4] = [
    BasemapSpec {
        name: "OpenStreetMap",
        url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        min_zoom: DEFAULT_BASEMAP_MIN_ZOOM,
        max_zoom: Some(19),
    },
    BasemapSpec {
        name: "Google Terrain",
        url: "https://mts1.google.com/vt/lyrs=p&x={x}&y={y}&z={z}&hl=en",
        attribution: "Google",
        min_zoom: BASEMAP_MIN_ZOOM,
        max_zoom: None,
    },
    BasemapSpec {
        name: "Stamen Toner",
        url: "https://tiles.stadiamaps.com/tiles/stamen_toner/{z}/{x}/{y}.png",
        attribution: "&copy; <a href=\"https://stamen.com\">Stamen Design</a> &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        min_zoom: BASEMAP_MIN_ZOOM,
        max_zoom: None,
    },
    BasemapSpec {
        name: "Esri Satellite",
        url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        attribution: "Esri",
        min_zoom: BASEMAP_MIN_ZOOM,
        max_zoom: Some(13),
    },
];

/// Build the alternative background tile layers. Every call returns new layers, exactly one
/// of which is visible by default.
pub fn build_basemaps() -> Vec<Layer> {
    BASEMAPS
        .iter()
        .enumerate()
        .map(|(index, spec)| Layer {
            name: spec.name.to_string(),
            visible_by_default: index == 0,
            exclusive_with_siblings: true,
            content: LayerContent::Tiles(TileSource {
                url: spec.url.to_string(),
                attribution: spec.attribution.to_string(),
                min_zoom: spec.min_zoom,
                max_zoom: spec.max_zoom,
            }),
        })
        .collect()
}
