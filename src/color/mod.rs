//! Color values used to describe legend swatches and pixels

mod rgb;

pub use rgb::RgbColor;
