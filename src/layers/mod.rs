pub mod basemap;
pub mod choropleth;
pub mod layer;
pub mod marker;
