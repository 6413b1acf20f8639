//! Legend table definitions
//!
//! The radar legend is kept in `legend.toml` and embedded at compile time.
//! It is parsed once at startup into an immutable `Legend` that is then
//! passed by reference to whatever needs it.

use std::fmt;
use log::debug;

use crate::color::RgbColor;
use crate::constants::{MASK_EXTENSION, MASK_SUFFIX};
use crate::errors::{BandError, BandResult};

// Embedded radar reflectivity legend
const RADAR_LEGEND_TOML: &str = include_str!("../../legend.toml");

/// One legend swatch: reference color, dBZ label and output file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// Reference color of the swatch
    pub color: RgbColor,
    /// Band label, e.g. "75-70dBZ"
    pub label: String,
    /// File name of the band's masked output image
    pub file_name: String,
}

impl LegendEntry {
    /// Create a legend entry from a hex color code
    pub fn new(hex: &str, label: &str, file_name: &str) -> BandResult<Self> {
        Ok(LegendEntry {
            color: RgbColor::from_hex(hex)?,
            label: label.to_string(),
            file_name: file_name.to_string(),
        })
    }

    /// File name of this band's binary mask, `{label}_mask.png`
    pub fn mask_file_name(&self) -> String {
        format!("{}{}.{}", self.label, MASK_SUFFIX, MASK_EXTENSION)
    }
}

impl fmt::Display for LegendEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} {} -> {}", self.label, self.color, self.file_name)
    }
}

/// Ordered, immutable set of legend entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// Build a legend from entries in processing order
    pub fn new(entries: Vec<LegendEntry>) -> Self {
        Legend { entries }
    }

    /// The 15-band radar reflectivity legend
    pub fn radar_default() -> BandResult<Self> {
        Self::from_toml_str(RADAR_LEGEND_TOML)
    }

    /// Parse a legend from TOML
    ///
    /// The expected layout is an array of `[[band]]` tables, each with
    /// `color`, `label` and `file` string keys. Order is preserved.
    pub fn from_toml_str(content: &str) -> BandResult<Self> {
        let document: toml::Table = toml::from_str(content)
            .map_err(|e| BandError::InvalidLegend(format!("Failed to parse TOML: {}", e)))?;

        let bands = document
            .get("band")
            .and_then(|v| v.as_array())
            .ok_or_else(|| BandError::InvalidLegend("missing [[band]] array".to_string()))?;

        let mut entries = Vec::with_capacity(bands.len());
        for (index, band) in bands.iter().enumerate() {
            let color = Self::required_str(band, "color", index)?;
            let label = Self::required_str(band, "label", index)?;
            let file = Self::required_str(band, "file", index)?;

            let entry = LegendEntry::new(color, label, file)?;
            debug!("Legend entry {}: {}", index, entry);
            entries.push(entry);
        }

        Ok(Legend { entries })
    }

    fn required_str<'v>(band: &'v toml::Value, key: &str, index: usize) -> BandResult<&'v str> {
        band.get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| BandError::InvalidLegend(format!("band #{} is missing string key '{}'", index, key)))
    }

    /// Entries in processing order
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Number of bands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the legend has no bands
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its band label
    pub fn find(&self, label: &str) -> Option<&LegendEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LegendEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Legend {
    type Item = &'a LegendEntry;
    type IntoIter = std::slice::Iter<'a, LegendEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
