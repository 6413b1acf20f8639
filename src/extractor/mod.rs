//! Band extraction from radar images
//!
//! This module crops the radar image, builds one color mask per legend
//! band and writes the masked results.

mod region;
pub mod band_mask;
mod band_extractor;

// Public exports
pub use region::Region;
pub use band_mask::{build_band_mask, composite_masked, count_selected};
pub use band_extractor::{BandExtractor, BandReport};
