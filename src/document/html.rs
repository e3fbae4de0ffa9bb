use std::{fs, path::Path};

use crate::{
    error::WriteError,
    style::{
        escape::escape_html,
        legend::{render_legend, LEGEND_CSS},
    },
};

use super::compose::MapDocument;

const STYLESHEETS: [&str; 6] = [
    "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css",
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css",
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css",
    "https://unpkg.com/leaflet-draw@1.0.4/dist/leaflet.draw.css",
    "https://unpkg.com/leaflet.fullscreen@3.0.2/Control.FullScreen.css",
    "https://unpkg.com/leaflet.locatecontrol@0.79.0/dist/L.Control.Locate.min.css",
];

/// Leaflet must come first, the plugins extend it.
const SCRIPTS: [&str; 5] = [
    "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js",
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js",
    "https://unpkg.com/leaflet-draw@1.0.4/dist/leaflet.draw.js",
    "https://unpkg.com/leaflet.fullscreen@3.0.2/Control.FullScreen.js",
    "https://unpkg.com/leaflet.locatecontrol@0.79.0/dist/L.Control.Locate.min.js",
];

/// Builds the Leaflet map from the JSON payload embedded in the page.
const BOOTSTRAP_JS: &str = r#"
      const doc = JSON.parse(document.getElementById('map-document').textContent);
      const view = doc.view;
      const map = L.map('map', {
        center: view.center,
        zoom: view.zoom,
        minZoom: view.min_zoom,
        maxBounds: view.max_bounds,
        maxBoundsViscosity: view.max_bounds_viscosity,
        worldCopyJump: view.world_copy_jump,
      });

      const leafletLayers = {};
      for (const layer of doc.layers) {
        let built;
        if (layer.kind === 'tiles') {
          const options = { attribution: layer.attribution, minZoom: layer.min_zoom };
          if (layer.max_zoom !== null) {
            options.maxZoom = layer.max_zoom;
          }
          built = L.tileLayer(layer.url, options);
        } else if (layer.kind === 'marker_cluster') {
          built = L.markerClusterGroup();
          for (const marker of layer.markers) {
            L.circleMarker(marker.location, {
              radius: marker.radius,
              color: marker.outline_color,
              fill: true,
              fillColor: marker.fill,
              fillOpacity: marker.fill_opacity,
            })
              .bindPopup(marker.popup.html, { maxWidth: marker.popup.max_width })
              .addTo(built);
          }
        } else if (layer.kind === 'choropleth') {
          built = L.geoJSON(layer.features, {
            style: (feature) => ({
              fillColor: feature.fill,
              color: layer.style.outline_color,
              weight: layer.style.outline_weight,
              fillOpacity: layer.style.fill_opacity,
            }),
          });
        } else {
          continue;
        }
        leafletLayers[layer.name] = built;
        if (layer.visible_by_default) {
          built.addTo(map);
        }
      }

      for (const control of doc.controls) {
        if (control.kind === 'layer_toggle') {
          const baseLayers = {};
          const overlays = {};
          for (const entry of control.entries) {
            const target = entry.input === 'radio' ? baseLayers : overlays;
            target[entry.layer] = leafletLayers[entry.layer];
          }
          L.control.layers(baseLayers, overlays).addTo(map);
        } else if (control.kind === 'draw') {
          const draw = {
            polyline: false,
            polygon: false,
            rectangle: false,
            circle: false,
            marker: false,
            circlemarker: false,
          };
          for (const shape of control.shapes) {
            draw[shape] = {};
          }
          const drawn = new L.FeatureGroup().addTo(map);
          new L.Control.Draw({
            draw: draw,
            edit: control.edit ? { featureGroup: drawn } : false,
          }).addTo(map);
          map.on(L.Draw.Event.CREATED, (event) => drawn.addLayer(event.layer));
          if (control.export) {
            const link = L.DomUtil.create('a', 'leaflet-bar', map.getContainer());
            link.textContent = 'Export';
            link.href = '#';
            L.DomEvent.on(link, 'click', (event) => {
              L.DomEvent.preventDefault(event);
              const data = JSON.stringify(drawn.toGeoJSON());
              link.href = 'data:application/json;charset=utf-8,' + encodeURIComponent(data);
              link.download = 'data.geojson';
            });
          }
        } else if (control.kind === 'fullscreen') {
          L.control.fullscreen().addTo(map);
        } else if (control.kind === 'locate') {
          L.control.locate({ setView: 'once' }).addTo(map);
        } else if (control.kind === 'scale') {
          L.control.scale().addTo(map);
        }
      }
"#;

/// JSON of the document, safe to place inside a `<script>` element.
///
/// The HTML parser ends a script on `</script` and changes state on `<!--`, so no raw `<`, `>`
/// or `&` may reach the page. They only occur inside JSON strings, where the `\u` escapes
/// decode to the same text.
fn script_payload(document: &MapDocument) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(document)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Render the document as a single HTML page. The map data is embedded, only the Leaflet
/// assets and the basemap tiles are fetched by the browser.
pub fn serialize(document: &MapDocument) -> Result<String, serde_json::Error> {
    let payload = script_payload(document)?;
    let stylesheets: String = STYLESHEETS
        .iter()
        .map(|href| format!("    <link rel=\"stylesheet\" href=\"{href}\" />\n"))
        .collect();
    let scripts: String = SCRIPTS
        .iter()
        .map(|src| format!("    <script src=\"{src}\"></script>\n"))
        .collect();
    let legends: String = document.legends.iter().map(render_legend).collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
{stylesheets}    <style>
      html, body {{ height: 100%; margin: 0; padding: 0; }}
      #map {{ height: 100%; width: 100%; }}
{legend_css}    </style>
  </head>
  <body>
    <div id="map">
{legends}    </div>
{scripts}    <script id="map-document" type="application/json">{payload}</script>
    <script>{bootstrap}    </script>
  </body>
</html>
"#,
        title = escape_html(&document.title),
        stylesheets = stylesheets,
        legend_css = LEGEND_CSS,
        legends = legends,
        scripts = scripts,
        payload = payload,
        bootstrap = BOOTSTRAP_JS,
    ))
}

/// Write a serialized document to disk, replacing any previous file.
pub fn write_document(html: &str, output_filepath: &Path) -> Result<(), WriteError> {
    log::info!(
        "Writing {} bytes of map document to {:?}",
        html.len(),
        output_filepath
    );
    fs::write(output_filepath, html).map_err(|source| WriteError {
        path: output_filepath.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use testdir::testdir;

    use crate::{
        data::{population::PopulationFeature, volcano::VolcanoRecord},
        document::compose::compose,
        layers::{
            basemap::build_basemaps, choropleth::build_choropleth, marker::build_marker_cluster,
        },
        style::legend::{population_legend, volcano_legend},
    };

    use super::{serialize, write_document};

    fn document_with_name(name: &str) -> super::MapDocument {
        let record = VolcanoRecord {
            latitude: 1.0,
            longitude: 2.0,
            elevation: 3.0,
            name: name.to_string(),
            status: "Unknown".to_string(),
            volcano_type: "Caldera".to_string(),
        };
        compose(
            build_basemaps(),
            build_marker_cluster(&[record]),
            build_choropleth(&[]),
            vec![volcano_legend(), population_legend()],
        )
    }

    #[test]
    fn test_serialize_page_structure() {
        let html = serialize(&document_with_name("Etna")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Volcano Map</title>"));
        assert!(html.contains("leaflet.markercluster.js"));
        assert_eq!(2, html.matches("<div class=\"maplegend\"").count());
        assert!(html.contains("Higher than 3000 m"));
        assert!(html.contains("More than 20 million"));
    }

    #[test]
    fn test_serialize_payload_is_document_json() {
        let document = document_with_name("Etna");
        let html = serialize(&document).unwrap();
        let payload: serde_json::Value = serde_json::from_str(payload_of(&html)).unwrap();

        assert_eq!(serde_json::to_value(&document).unwrap(), payload);
    }

    fn payload_of(html: &str) -> &str {
        let start_tag = "<script id=\"map-document\" type=\"application/json\">";
        let start = html.find(start_tag).unwrap() + start_tag.len();
        let end = start + html[start..].find("</script>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_serialize_payload_is_script_safe() {
        let country = serde_json::json!({"NAME": "</script><!--<script>", "NOTE": "A & B > C"});
        let feature = PopulationFeature {
            feature: geojson::Feature {
                bbox: None,
                geometry: None,
                id: None,
                properties: country.as_object().cloned(),
                foreign_members: None,
            },
            population: 1_000,
        };
        let document = compose(
            build_basemaps(),
            build_marker_cluster(&[]),
            build_choropleth(&[feature]),
            vec![],
        );
        let html = serialize(&document).unwrap();

        let payload = payload_of(&html);
        for forbidden in ["<", ">", "&", "<!--", "</script"] {
            assert!(!payload.contains(forbidden), "{:?} in payload", forbidden);
        }
        // The element is closed by its own tag, right before the bootstrap script.
        assert!(html.contains(&format!("{}</script>\n    <script>", payload)));

        let parsed: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(serde_json::to_value(&document).unwrap(), parsed);
        assert_eq!(
            "</script><!--<script>",
            parsed["layers"][5]["features"]["features"][0]["properties"]["NAME"]
        );
    }

    #[test]
    fn test_serialize_escapes_popup_payload() {
        let html = serialize(&document_with_name("</script><script>alert(1)</script>")).unwrap();
        assert_eq!(1, html.matches("<script id=\"map-document\"").count());
        assert!(!html.contains("alert(1)</script>"));
        // The popup is HTML-escaped first, then its `&` is escaped for the script element.
        assert!(payload_of(&html).contains("\\u0026lt;/script\\u0026gt;"));
    }

    #[test]
    fn test_serialize_legends_inside_map_container() {
        let html = serialize(&document_with_name("Etna")).unwrap();
        // Fullscreen only enlarges the map container, so the legends must be its children.
        let map_open = html.find("<div id=\"map\">").unwrap();
        let first_script = html.find("<script").unwrap();
        let legends: Vec<usize> = html
            .match_indices("<div class=\"maplegend\"")
            .map(|(index, _)| index)
            .collect();
        assert_eq!(2, legends.len());
        assert!(legends
            .iter()
            .all(|&index| map_open < index && index < first_script));

        let container = &html[map_open..first_script];
        assert_eq!(
            container.matches("<div").count(),
            container.matches("</div>").count()
        );
        assert!(container.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_write_document() {
        let dir = testdir!();
        let output_filepath = dir.join("index.html");
        write_document("<html></html>", &output_filepath).unwrap();
        assert_eq!(
            "<html></html>",
            std::fs::read_to_string(&output_filepath).unwrap()
        );

        let error = write_document("<html></html>", &dir.join("missing").join("index.html"))
            .unwrap_err();
        assert_eq!(dir.join("missing").join("index.html"), error.path);
    }
}
