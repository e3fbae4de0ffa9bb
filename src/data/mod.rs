pub mod population;
pub mod volcano;
