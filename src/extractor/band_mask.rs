//! Band masks
//!
//! A band mask marks every pixel whose color lies within a tolerance of a
//! legend swatch. Masks are plain `GrayImage`s holding 255 for selected
//! and 0 for cleared positions, so they can be written out as-is.

use image::{GrayImage, Luma, RgbImage};

use crate::color::RgbColor;
use crate::constants::{MASK_CLEARED, MASK_SELECTED};

/// Select every pixel within `tolerance` of `reference`
///
/// # Arguments
/// * `image` - The (cropped) source image, left untouched
/// * `reference` - Legend swatch color
/// * `tolerance` - Maximum Euclidean RGB distance, inclusive
///
/// # Returns
/// A mask with the same dimensions as `image`
pub fn build_band_mask(image: &RgbImage, reference: RgbColor, tolerance: f64) -> GrayImage {
    let mut mask = GrayImage::new(image.width(), image.height());

    for (pixel, out) in image.pixels().zip(mask.pixels_mut()) {
        if reference.matches(&RgbColor::from(pixel), tolerance) {
            *out = Luma([MASK_SELECTED]);
        }
    }

    mask
}

/// Number of selected positions in a mask
pub fn count_selected(mask: &GrayImage) -> u64 {
    mask.pixels().filter(|p| p[0] != MASK_CLEARED).count() as u64
}

/// Keep the source pixel where the mask is selected, black elsewhere
///
/// Both inputs must have the same dimensions; the result is a new image.
pub fn composite_masked(image: &RgbImage, mask: &GrayImage) -> RgbImage {
    debug_assert_eq!(image.dimensions(), mask.dimensions());

    let mut output = RgbImage::from_pixel(image.width(), image.height(), RgbColor::BLACK.into());

    for ((pixel, selected), out) in image.pixels().zip(mask.pixels()).zip(output.pixels_mut()) {
        if selected[0] != MASK_CLEARED {
            *out = *pixel;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn striped_image() -> RgbImage {
        // columns alternate between exact red and a red 12 units away
        RgbImage::from_fn(8, 4, |x, _| {
            if x % 2 == 0 { Rgb([255, 0, 0]) } else { Rgb([243, 0, 0]) }
        })
    }

    #[test]
    fn test_uniform_image_is_fully_selected() {
        let image = RgbImage::from_pixel(5, 3, Rgb([0xE7, 0xC0, 0x00]));
        let reference = RgbColor::new(0xE7, 0xC0, 0x00);

        for tolerance in [0.5, 15.0, 500.0] {
            let mask = build_band_mask(&image, reference, tolerance);
            assert_eq!(mask.dimensions(), (5, 3));
            assert_eq!(count_selected(&mask), 15);
        }
    }

    #[test]
    fn test_far_image_is_fully_cleared() {
        let image = RgbImage::from_pixel(5, 3, Rgb([0, 0, 0]));
        let mask = build_band_mask(&image, RgbColor::new(20, 0, 0), 15.0);
        assert_eq!(count_selected(&mask), 0);
        assert!(mask.pixels().all(|p| p[0] == MASK_CLEARED));
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let image = striped_image();
        let reference = RgbColor::new(255, 0, 0);

        assert_eq!(count_selected(&build_band_mask(&image, reference, 0.0)), 16);
        assert_eq!(count_selected(&build_band_mask(&image, reference, 11.9)), 16);
        assert_eq!(count_selected(&build_band_mask(&image, reference, 12.0)), 32);
        assert_eq!(count_selected(&build_band_mask(&image, reference, -1.0)), 0);

        let mask = build_band_mask(&image, reference, 0.0);
        assert_eq!(mask.get_pixel(0, 0)[0], MASK_SELECTED);
        assert_eq!(mask.get_pixel(1, 0)[0], MASK_CLEARED);
    }

    #[test]
    fn test_zero_size_image() {
        let image = RgbImage::new(0, 0);
        let mask = build_band_mask(&image, RgbColor::BLACK, 15.0);
        assert_eq!(mask.dimensions(), (0, 0));
        assert_eq!(count_selected(&mask), 0);
        assert_eq!(composite_masked(&image, &mask).dimensions(), (0, 0));
    }

    #[test]
    fn test_composite_selects_or_zeroes() {
        let image = RgbImage::from_fn(4, 4, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 200]));
        let mask = GrayImage::from_fn(4, 4, |x, y| {
            if x == y { Luma([MASK_SELECTED]) } else { Luma([MASK_CLEARED]) }
        });

        let output = composite_masked(&image, &mask);
        for (x, y, pixel) in output.enumerate_pixels() {
            if x == y {
                assert_eq!(pixel, image.get_pixel(x, y));
            } else {
                assert_eq!(*pixel, Rgb([0, 0, 0]));
            }
        }
        assert_eq!(count_selected(&mask), 4);
    }

    #[test]
    fn test_overlapping_bands_are_kept() {
        // #C00000 and #D60000 are 22 apart; a pixel halfway matches both
        let image = RgbImage::from_pixel(2, 2, Rgb([0xCB, 0, 0]));
        let dark = build_band_mask(&image, RgbColor::new(0xC0, 0, 0), 15.0);
        let light = build_band_mask(&image, RgbColor::new(0xD6, 0, 0), 15.0);
        assert_eq!(count_selected(&dark), 4);
        assert_eq!(count_selected(&light), 4);
    }
}
