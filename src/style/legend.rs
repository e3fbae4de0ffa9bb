use serde::Serialize;

use super::{
    color::{
        ColorBucket, POPULATION_ORANGE_FROM, POPULATION_RED_FROM, VOLCANO_ORANGE_FROM_M,
        VOLCANO_RED_FROM_M,
    },
    escape::escape_html,
};

/// One swatch of a legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: ColorBucket,
    pub label: String,
}

/// Offset of a legend box from the bottom-right corner of the map, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendPosition {
    pub right_px: u32,
    pub bottom_px: u32,
}

/// Static description of a color scale, drawn above every map layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
    pub position: LegendPosition,
}

/// Shared stylesheet for every legend produced by [`render_legend`].
pub const LEGEND_CSS: &str = r#"
  .maplegend {
    position: absolute;
    z-index: 9999;
    pointer-events: none;
    border: 2px solid grey;
    background-color: rgba(255, 255, 255, 0.8);
    border-radius: 6px;
    padding: 10px;
    font-size: 14px;
  }
  .maplegend .legend-title {
    text-align: left;
    margin-bottom: 5px;
    font-weight: bold;
    font-size: 90%;
  }
  .maplegend .legend-scale ul {
    margin: 0;
    margin-bottom: 5px;
    padding: 0;
    float: left;
    list-style: none;
  }
  .maplegend .legend-scale ul li {
    font-size: 80%;
    list-style: none;
    margin-left: 0;
    line-height: 18px;
    margin-bottom: 2px;
  }
  .maplegend ul.legend-labels li span {
    display: block;
    float: left;
    height: 16px;
    width: 30px;
    margin-right: 5px;
    margin-left: 0;
    border: 1px solid #999;
  }
"#;

fn entry(color: ColorBucket, label: String) -> LegendEntry {
    LegendEntry { color, label }
}

/// Legend for the volcano markers, highest bucket first.
pub fn volcano_legend() -> Legend {
    Legend {
        title: "Volcano".to_string(),
        entries: vec![
            entry(
                ColorBucket::Red,
                format!("Higher than {} m", VOLCANO_RED_FROM_M),
            ),
            entry(
                ColorBucket::Orange,
                format!("Lower than {} m", VOLCANO_RED_FROM_M),
            ),
            entry(
                ColorBucket::Green,
                format!("Lower than {} m", VOLCANO_ORANGE_FROM_M),
            ),
        ],
        position: LegendPosition {
            right_px: 20,
            bottom_px: 160,
        },
    }
}

/// Legend for the population choropleth, stacked below the volcano legend.
pub fn population_legend() -> Legend {
    Legend {
        title: "Population".to_string(),
        entries: vec![
            entry(
                ColorBucket::Red,
                format!("More than {} million", POPULATION_RED_FROM / 1_000_000),
            ),
            entry(
                ColorBucket::Orange,
                format!("Less than {} million", POPULATION_RED_FROM / 1_000_000),
            ),
            entry(
                ColorBucket::Green,
                format!("Less than {} million", POPULATION_ORANGE_FROM / 1_000_000),
            ),
        ],
        position: LegendPosition {
            right_px: 20,
            bottom_px: 40,
        },
    }
}

/// Render a legend as a fixed-position HTML fragment. Styling comes from [`LEGEND_CSS`].
pub fn render_legend(legend: &Legend) -> String {
    let items: String = legend
        .entries
        .iter()
        .map(|entry| {
            format!(
                "      <li><span style=\"background:{};opacity:0.7;\"></span>{}</li>\n",
                entry.color.css_color(),
                escape_html(&entry.label)
            )
        })
        .collect();
    format!(
        concat!(
            "<div class=\"maplegend\" style=\"right: {right}px; bottom: {bottom}px;\">\n",
            "  <div class=\"legend-title\">{title}</div>\n",
            "  <div class=\"legend-scale\">\n",
            "    <ul class=\"legend-labels\">\n",
            "{items}",
            "    </ul>\n",
            "  </div>\n",
            "</div>\n"
        ),
        right = legend.position.right_px,
        bottom = legend.position.bottom_px,
        title = escape_html(&legend.title),
        items = items,
    )
}
