pub mod errors;
pub mod constants;
pub mod color;
pub mod legend;
pub mod io;
pub mod extractor;
pub mod utils;
pub mod cli;
pub mod commands;
pub mod api;

pub use crate::api::{ExtractionSummary, RadarBands};

pub use color::RgbColor;
pub use errors::{BandError, BandResult};
pub use extractor::{BandExtractor, BandReport, Region};
pub use legend::{Legend, LegendEntry};
