//! Region structure for defining the crop area
//!
//! Coordinates are in pixels, with (0,0) at the top-left corner of the
//! image.

use image::{imageops, RgbImage};

use crate::constants::CROP_SIZE;
use crate::errors::{BandError, BandResult};

/// Rectangular pixel region of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// The fixed radar crop: 730x730 anchored at the top-left corner
    pub fn radar_crop() -> Self {
        Region::new(0, 0, CROP_SIZE, CROP_SIZE)
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Number of pixels covered by the region
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check that the region fits inside an image of the given size
    ///
    /// # Returns
    /// `ImageTooSmall` naming both sizes when any edge falls outside
    pub fn validate_within(&self, width: u32, height: u32) -> BandResult<()> {
        if self.end_x() > width as u64 || self.end_y() > height as u64 {
            return Err(BandError::ImageTooSmall {
                width,
                height,
                required_width: self.end_x().min(u32::MAX as u64) as u32,
                required_height: self.end_y().min(u32::MAX as u64) as u32,
            });
        }
        Ok(())
    }

    /// Copy the region out of an image after checking its bounds
    pub fn crop(&self, image: &RgbImage) -> BandResult<RgbImage> {
        self.validate_within(image.width(), image.height())?;
        Ok(imageops::crop_imm(image, self.x, self.y, self.width, self.height).to_image())
    }
}
