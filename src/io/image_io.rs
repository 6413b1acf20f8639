//! Image loading and saving
//!
//! Decoding and encoding are left to the `image` crate; this module only
//! maps its errors onto `BandError` and fixes the pixel layout to 8-bit RGB.

use std::path::Path;
use image::{DynamicImage, ImageBuffer, Pixel, PixelWithColorType, RgbImage};
use log::debug;

use crate::errors::{BandError, BandResult};

/// Open and decode an image as 8-bit RGB, dropping any alpha channel
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> BandResult<RgbImage> {
    let path = path.as_ref();
    debug!("Loading image {}", path.display());

    let image = image::open(path).map_err(|e| BandError::ImageLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(to_rgb(image))
}

/// Convert a decoded image to 8-bit RGB without copying when it already is
pub fn to_rgb(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    }
}

/// Encode and write an image; the format follows the file extension
pub fn save_image<P, Q>(image: &ImageBuffer<P, Vec<u8>>, path: Q) -> BandResult<()>
where
    P: Pixel<Subpixel = u8> + PixelWithColorType,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("Saving {}x{} image to {}", image.width(), image.height(), path.display());

    image.save(path).map_err(|e| BandError::ImageSave {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
