//! Radar legend: the fixed mapping from swatch colors to dBZ bands

mod table;

pub use table::{Legend, LegendEntry};
