pub mod color;
pub mod escape;
pub mod legend;
