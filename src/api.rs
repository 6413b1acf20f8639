use std::path::Path;
use image::DynamicImage;
use log::{info, warn};

use crate::constants::CROPPED_IMAGE_NAME;
use crate::errors::BandResult;
use crate::extractor::{BandExtractor, BandReport, Region};
use crate::io::image_io::{load_rgb_image, save_image, to_rgb};
use crate::legend::Legend;

/// Result of one extraction run
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionSummary {
    /// Width and height of the source image
    pub source_size: (u32, u32),
    /// Region that was cropped and processed
    pub region: Region,
    /// Whether the cropped reference image was written
    pub cropped_saved: bool,
    /// One report per legend entry, in legend order
    pub bands: Vec<BandReport>,
}

impl ExtractionSummary {
    /// Sum of selected pixels over all bands; overlapping bands count twice
    pub fn total_selected(&self) -> u64 {
        self.bands.iter().map(|b| b.pixel_count).sum()
    }

    /// Number of files that could not be written
    pub fn failed_saves(&self) -> usize {
        let band_failures: usize = self.bands
            .iter()
            .map(|b| (!b.output_saved) as usize + (!b.mask_saved) as usize)
            .sum();
        band_failures + (!self.cropped_saved) as usize
    }

    /// Report for a band label
    pub fn band(&self, label: &str) -> Option<&BandReport> {
        self.bands.iter().find(|b| b.label == label)
    }
}

/// Main interface to the radarbands library
pub struct RadarBands<'a> {
    legend: &'a Legend,
    region: Region,
    parallel: bool,
    show_progress: bool,
}

impl<'a> RadarBands<'a> {
    /// Create an instance over a legend with the fixed radar crop
    pub fn new(legend: &'a Legend) -> Self {
        RadarBands {
            legend,
            region: Region::radar_crop(),
            parallel: false,
            show_progress: false,
        }
    }

    /// Process bands on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Draw a progress bar while processing bands
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Load an image from disk and extract every band into `output_dir`
    ///
    /// # Arguments
    /// * `input_path` - Radar image to split
    /// * `output_dir` - Existing directory for the cropped image, band
    ///   images and masks
    ///
    /// # Returns
    /// The run summary, or an error when the source cannot be loaded or is
    /// smaller than the crop. Nothing is written in the error case.
    pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(&self, input_path: P, output_dir: Q) -> BandResult<ExtractionSummary> {
        let source = load_rgb_image(input_path.as_ref())?;
        info!("Original image size: {}x{}", source.width(), source.height());

        self.extract_rgb(&source, output_dir.as_ref())
    }

    /// Extract every band from an already decoded image
    pub fn extract_image<Q: AsRef<Path>>(&self, image: DynamicImage, output_dir: Q) -> BandResult<ExtractionSummary> {
        let source = to_rgb(image);
        self.extract_rgb(&source, output_dir.as_ref())
    }

    fn extract_rgb(&self, source: &image::RgbImage, output_dir: &Path) -> BandResult<ExtractionSummary> {
        let cropped = self.region.crop(source)?;
        info!("Cropped image size: {}x{}", cropped.width(), cropped.height());

        let cropped_path = output_dir.join(CROPPED_IMAGE_NAME);
        let cropped_saved = match save_image(&cropped, &cropped_path) {
            Ok(()) => {
                info!("Saved cropped image as {}", cropped_path.display());
                true
            }
            Err(e) => {
                warn!("Could not save cropped image: {}", e);
                false
            }
        };

        let bands = BandExtractor::new(self.legend)
            .with_parallel(self.parallel)
            .with_progress(self.show_progress)
            .process(&cropped, output_dir);

        Ok(ExtractionSummary {
            source_size: source.dimensions(),
            region: self.region,
            cropped_saved,
            bands,
        })
    }
}
