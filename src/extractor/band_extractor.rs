//! Per-band extraction over a legend
//!
//! For each legend entry the extractor builds a band mask over the cropped
//! image, composites the masked output, writes both to disk and counts the
//! selected pixels. Entries are independent: they share only read-only
//! inputs and write to their own files, so they can run in parallel.

use std::path::{Path, PathBuf};
use image::RgbImage;
use log::{debug, error, info};
use rayon::prelude::*;

use crate::constants::BAND_TOLERANCE;
use crate::extractor::band_mask::{build_band_mask, composite_masked, count_selected};
use crate::io::image_io::save_image;
use crate::legend::{Legend, LegendEntry};
use crate::utils::progress::ProgressTracker;

/// Outcome of processing one legend entry
#[derive(Debug, Clone, PartialEq)]
pub struct BandReport {
    /// Band label, e.g. "50-45dBZ"
    pub label: String,
    /// Where the masked output image was written
    pub output_path: PathBuf,
    /// Where the binary mask was written
    pub mask_path: PathBuf,
    /// Number of pixels selected by the mask
    pub pixel_count: u64,
    /// Whether the masked output was saved
    pub output_saved: bool,
    /// Whether the mask was saved
    pub mask_saved: bool,
}

impl BandReport {
    /// Whether both files for this band were written
    pub fn is_saved(&self) -> bool {
        self.output_saved && self.mask_saved
    }
}

/// Extracts one masked image and mask per legend entry
pub struct BandExtractor<'a> {
    legend: &'a Legend,
    tolerance: f64,
    parallel: bool,
    show_progress: bool,
}

impl<'a> BandExtractor<'a> {
    /// Create an extractor using the standard 15.0 tolerance, sequentially
    pub fn new(legend: &'a Legend) -> Self {
        BandExtractor {
            legend,
            tolerance: BAND_TOLERANCE,
            parallel: false,
            show_progress: false,
        }
    }

    /// Override the color distance tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Process legend entries on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Draw a progress bar while processing
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Process every legend entry against the cropped image
    ///
    /// # Arguments
    /// * `cropped` - The cropped source image, shared read-only by all bands
    /// * `output_dir` - Directory receiving the band images and masks
    ///
    /// # Returns
    /// One report per legend entry, in legend order. Save failures are
    /// recorded in the reports, never returned as errors.
    pub fn process(&self, cropped: &RgbImage, output_dir: &Path) -> Vec<BandReport> {
        let progress = if self.show_progress {
            ProgressTracker::new(self.legend.len() as u64, "Extracting bands")
        } else {
            ProgressTracker::hidden()
        };

        let reports: Vec<BandReport> = if self.parallel {
            debug!("Processing {} bands in parallel", self.legend.len());
            self.legend
                .entries()
                .par_iter()
                .map(|entry| self.process_entry(entry, cropped, output_dir, &progress))
                .collect()
        } else {
            self.legend
                .iter()
                .map(|entry| self.process_entry(entry, cropped, output_dir, &progress))
                .collect()
        };

        progress.finish();
        reports
    }

    fn process_entry(
        &self,
        entry: &LegendEntry,
        cropped: &RgbImage,
        output_dir: &Path,
        progress: &ProgressTracker,
    ) -> BandReport {
        info!("Processing {}...", entry.label);
        progress.set_message(&entry.label);

        let mask = build_band_mask(cropped, entry.color, self.tolerance);
        let output = composite_masked(cropped, &mask);

        let output_path = output_dir.join(&entry.file_name);
        let output_saved = match save_image(&output, &output_path) {
            Ok(()) => {
                info!("Successfully saved {}", output_path.display());
                true
            }
            Err(e) => {
                error!("Error saving {}: {}", output_path.display(), e);
                false
            }
        };

        let mask_path = output_dir.join(entry.mask_file_name());
        let mask_saved = match save_image(&mask, &mask_path) {
            Ok(()) => true,
            Err(e) => {
                error!("Error saving mask {}: {}", mask_path.display(), e);
                false
            }
        };

        let pixel_count = count_selected(&mask);
        info!("Found {} pixels for {}", pixel_count, entry.label);
        progress.increment(1);

        BandReport {
            label: entry.label.clone(),
            output_path,
            mask_path,
            pixel_count,
            output_saved,
            mask_saved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use crate::io::image_io::load_rgb_image;

    fn two_band_legend() -> Legend {
        Legend::new(vec![
            LegendEntry::new("#FF0000", "red", "red.png").unwrap(),
            LegendEntry::new("#0000FF", "blue", "blue.png").unwrap(),
        ])
    }

    fn half_red_image() -> RgbImage {
        RgbImage::from_fn(10, 4, |x, _| if x < 5 { Rgb([250, 5, 0]) } else { Rgb([0, 200, 0]) })
    }

    #[test]
    fn test_reports_follow_legend_order() {
        let dir = tempfile::tempdir().unwrap();
        let legend = two_band_legend();

        let reports = BandExtractor::new(&legend).process(&half_red_image(), dir.path());

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].label, "red");
        assert_eq!(reports[0].pixel_count, 20);
        assert_eq!(reports[1].label, "blue");
        assert_eq!(reports[1].pixel_count, 0);
        assert!(reports.iter().all(BandReport::is_saved));

        assert_eq!(reports[0].output_path, dir.path().join("red.png"));
        assert_eq!(reports[0].mask_path, dir.path().join("red_mask.png"));
        assert!(reports[1].mask_path.exists());
    }

    #[test]
    fn test_written_output_is_masked_composite() {
        let dir = tempfile::tempdir().unwrap();
        let legend = two_band_legend();
        let source = half_red_image();

        BandExtractor::new(&legend).process(&source, dir.path());

        let output = load_rgb_image(dir.path().join("red.png")).unwrap();
        assert_eq!(output.dimensions(), source.dimensions());
        assert_eq!(*output.get_pixel(0, 0), Rgb([250, 5, 0]));
        assert_eq!(*output.get_pixel(9, 3), Rgb([0, 0, 0]));

        let mask = image::open(dir.path().join("red_mask.png")).unwrap().to_luma8();
        assert_eq!(mask.get_pixel(4, 2)[0], 255);
        assert_eq!(mask.get_pixel(5, 2)[0], 0);
    }

    #[test]
    fn test_tolerance_override() {
        let dir = tempfile::tempdir().unwrap();
        let legend = two_band_legend();

        // (250, 5, 0) is about 7.07 away from pure red
        let reports = BandExtractor::new(&legend)
            .with_tolerance(5.0)
            .process(&half_red_image(), dir.path());
        assert_eq!(reports[0].pixel_count, 0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let legend = Legend::radar_default().unwrap();
        let image = RgbImage::from_fn(30, 30, |x, y| {
            let entry = &legend.entries()[((x + y) % 15) as usize];
            entry.color.into()
        });

        let seq_dir = tempfile::tempdir().unwrap();
        let par_dir = tempfile::tempdir().unwrap();
        let sequential = BandExtractor::new(&legend).process(&image, seq_dir.path());
        let parallel = BandExtractor::new(&legend).with_parallel(true).process(&image, par_dir.path());

        let counts = |reports: &[BandReport]| -> Vec<(String, u64)> {
            reports.iter().map(|r| (r.label.clone(), r.pixel_count)).collect()
        };
        assert_eq!(counts(&sequential), counts(&parallel));
        assert!(sequential.iter().map(|r| r.pixel_count).sum::<u64>() >= 900);
    }

    #[test]
    fn test_save_failure_does_not_stop_other_bands() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let legend = two_band_legend();

        let reports = BandExtractor::new(&legend).process(&half_red_image(), &missing);

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| !r.output_saved && !r.mask_saved));
        assert_eq!(reports[0].pixel_count, 20);
    }
}
