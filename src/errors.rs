//! Custom error types for band extraction

use std::fmt;
use std::io;

/// Band extraction error types
#[derive(Debug)]
pub enum BandError {
    /// I/O error
    IoError(io::Error),
    /// Source image could not be opened or decoded
    ImageLoad { path: String, reason: String },
    /// Image could not be encoded or written
    ImageSave { path: String, reason: String },
    /// Source image is smaller than the crop region
    ImageTooSmall { width: u32, height: u32, required_width: u32, required_height: u32 },
    /// Malformed hex color code
    InvalidHexColor(String),
    /// Malformed legend table
    InvalidLegend(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for BandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandError::IoError(e) => write!(f, "I/O error: {}", e),
            BandError::ImageLoad { path, reason } => write!(f, "Could not load image {}: {}", path, reason),
            BandError::ImageSave { path, reason } => write!(f, "Could not save image {}: {}", path, reason),
            BandError::ImageTooSmall { width, height, required_width, required_height } => write!(
                f,
                "Image is too small for {}x{} crop (got {}x{})",
                required_width, required_height, width, height
            ),
            BandError::InvalidHexColor(hex) => write!(f, "Invalid hex color code: {} - must be 6 hexadecimal digits", hex),
            BandError::InvalidLegend(msg) => write!(f, "Invalid legend: {}", msg),
            BandError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for BandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BandError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BandError {
    fn from(error: io::Error) -> Self {
        BandError::IoError(error)
    }
}

impl From<String> for BandError {
    fn from(msg: String) -> Self {
        BandError::GenericError(msg)
    }
}

/// Result type for band extraction operations
pub type BandResult<T> = Result<T, BandError>;
