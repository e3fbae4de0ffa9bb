use serde::Serialize;

/// Elevation in meters from which a volcano is drawn orange.
pub const VOLCANO_ORANGE_FROM_M: f64 = 1000.0;
/// Elevation in meters from which a volcano is drawn red.
pub const VOLCANO_RED_FROM_M: f64 = 3000.0;
/// Population from which a country is filled orange.
pub const POPULATION_ORANGE_FROM: u64 = 10_000_000;
/// Population from which a country is filled red.
pub const POPULATION_RED_FROM: u64 = 20_000_000;

/// Discrete color a classified value is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBucket {
    Green,
    Orange,
    Red,
}

impl ColorBucket {
    /// CSS color name understood by the browser.
    pub fn css_color(&self) -> &'static str {
        match self {
            ColorBucket::Green => "green",
            ColorBucket::Orange => "orange",
            ColorBucket::Red => "red",
        }
    }
}

/// Classify a volcano by its elevation in meters.
///
/// Buckets are half-open: `[-inf, 1000)` green, `[1000, 3000)` orange, `[3000, inf)` red.
pub fn volcano_color(elevation: f64) -> ColorBucket {
    if elevation < VOLCANO_ORANGE_FROM_M {
        ColorBucket::Green
    } else if elevation < VOLCANO_RED_FROM_M {
        ColorBucket::Orange
    } else {
        ColorBucket::Red
    }
}

/// Classify a country by its population count.
pub fn population_color(population: u64) -> ColorBucket {
    if population < POPULATION_ORANGE_FROM {
        ColorBucket::Green
    } else if population < POPULATION_RED_FROM {
        ColorBucket::Orange
    } else {
        ColorBucket::Red
    }
}
