//! Render volcanoes and world population onto one interactive Leaflet map.
//!
//! The pipeline reads a volcano table and a GeoJSON world map ([`data`]), turns them into
//! styled layers ([`layers`]) using the color scales in [`style`], and composes everything
//! into a single HTML page ([`document`]). [`pipeline::render_map`] runs all of it.
pub mod config;
pub mod data;
pub mod document;
pub mod error;
pub mod layers;
pub mod pipeline;
pub mod style;
