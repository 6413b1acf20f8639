//! RGB color value and distance metric
//!
//! Legend swatches are written as hex triplets; pixels come out of the
//! `image` crate as `Rgb<u8>`. Both end up as an `RgbColor` so they can be
//! compared with a plain Euclidean distance.

use std::fmt;
use image::Rgb;

use crate::errors::{BandError, BandResult};

/// Simple RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Black, the background of every band output
    pub const BLACK: RgbColor = RgbColor { r: 0, g: 0, b: 0 };

    /// Create a new RGB color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        RgbColor { r, g, b }
    }

    /// Create from hex string
    ///
    /// # Arguments
    /// * `hex` - Six hex digits, with or without a single `#` prefix
    ///
    /// # Returns
    /// The parsed color, or `InvalidHexColor` for a wrong length or any
    /// non-hex character
    pub fn from_hex(hex: &str) -> BandResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        // from_str_radix alone would accept a leading '+'
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BandError::InvalidHexColor(hex.to_string()));
        }

        let r = parse_hex_component(&digits[0..2], hex)?;
        let g = parse_hex_component(&digits[2..4], hex)?;
        let b = parse_hex_component(&digits[4..6], hex)?;

        Ok(RgbColor { r, g, b })
    }

    /// Convert to hex string (#rrggbb format)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Euclidean distance between the two component vectors
    ///
    /// Ranges from 0.0 (identical) to about 441.67 (black against white).
    pub fn distance(&self, other: &RgbColor) -> f64 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;

        ((dr * dr + dg * dg + db * db) as f64).sqrt()
    }

    /// Whether `other` lies within `tolerance` of this color
    ///
    /// A negative or NaN tolerance matches nothing.
    pub fn matches(&self, other: &RgbColor, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }
}

fn parse_hex_component(hex_part: &str, full_hex: &str) -> BandResult<u8> {
    u8::from_str_radix(hex_part, 16)
        .map_err(|_| BandError::InvalidHexColor(full_hex.to_string()))
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Rgb<u8>> for RgbColor {
    fn from(pixel: Rgb<u8>) -> Self {
        RgbColor::new(pixel[0], pixel[1], pixel[2])
    }
}

impl From<&Rgb<u8>> for RgbColor {
    fn from(pixel: &Rgb<u8>) -> Self {
        RgbColor::new(pixel[0], pixel[1], pixel[2])
    }
}

impl From<RgbColor> for Rgb<u8> {
    fn from(color: RgbColor) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}
