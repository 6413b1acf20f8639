//! Band extraction command
//!
//! Loads the radar image, crops it and writes one masked image and one mask
//! per legend band, then records a summary in the run log.

use clap::ArgMatches;
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

use crate::api::{ExtractionSummary, RadarBands};
use crate::commands::command_traits::Command;
use crate::errors::{BandError, BandResult};
use crate::legend::Legend;
use crate::utils::logger::Logger;

/// Command for splitting a radar image into band images
pub struct ExtractCommand<'a> {
    /// Path to the input image
    input_file: PathBuf,
    /// Directory receiving all outputs
    output_dir: PathBuf,
    /// Whether bands are processed in parallel
    parallel: bool,
    /// Whether to draw a progress bar
    show_progress: bool,
    /// Logger for the run summary
    logger: &'a Logger,
    /// Legend table built at startup
    legend: &'a Legend,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for the run summary
    /// * `legend` - Legend table to extract
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger, legend: &'a Legend) -> BandResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| BandError::GenericError("Missing input file".to_string()))?;
        debug!("Input file: {}", input_file);

        let output_dir = args.get_one::<String>("output-dir")
            .ok_or_else(|| BandError::GenericError("Missing output directory".to_string()))?;
        debug!("Output directory: {}", output_dir);

        let parallel = args.get_flag("parallel");
        debug!("Parallel mode: {}", parallel);

        // verbose logging and a progress bar would interleave
        let show_progress = !args.get_flag("verbose");

        Ok(ExtractCommand {
            input_file: PathBuf::from(input_file),
            output_dir: PathBuf::from(output_dir),
            parallel,
            show_progress,
            logger,
            legend,
        })
    }

    /// Write the run summary to the run log
    fn record_summary(&self, summary: &ExtractionSummary) -> BandResult<()> {
        self.logger.log(&format!(
            "Source {} ({}x{}), crop {}x{} at ({}, {})",
            self.input_file.display(),
            summary.source_size.0,
            summary.source_size.1,
            summary.region.width,
            summary.region.height,
            summary.region.x,
            summary.region.y
        ))?;

        for band in &summary.bands {
            let status = if band.is_saved() { "saved" } else { "SAVE FAILED" };
            self.logger.log(&format!(
                "{:<10} {:>8} pixels  {}  {}",
                band.label,
                band.pixel_count,
                band.output_path.display(),
                status
            ))?;
        }

        self.logger.log(&format!(
            "Total selected pixels: {}, failed saves: {}",
            summary.total_selected(),
            summary.failed_saves()
        ))?;
        Ok(())
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> BandResult<()> {
        info!("Extracting {} bands from {}", self.legend.len(), self.input_file.display());

        fs::create_dir_all(&self.output_dir)?;

        let summary = RadarBands::new(self.legend)
            .with_parallel(self.parallel)
            .with_progress(self.show_progress)
            .extract(&self.input_file, &self.output_dir)?;

        self.record_summary(&summary)?;

        let failed = summary.failed_saves();
        if failed > 0 {
            warn!("{} output files could not be written", failed);
        }

        info!("Processing completed!");
        info!("All gradient channels have been extracted and saved to {}", self.output_dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_execute_writes_outputs_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("radar.png");
        let output_dir = dir.path().join("bands");
        let log_path = dir.path().join("run.log");
        RgbImage::from_pixel(730, 730, Rgb([0, 0, 0xEF])).save(&input).unwrap();

        let matches = build_cli()
            .try_get_matches_from([
                "radarbands",
                input.to_str().unwrap(),
                "-o",
                output_dir.to_str().unwrap(),
                "-v",
            ])
            .unwrap();

        let logger = Logger::new(&log_path).unwrap();
        let legend = Legend::radar_default().unwrap();
        ExtractCommand::new(&matches, &logger, &legend).unwrap().execute().unwrap();

        assert!(output_dir.join("cropped_image.png").exists());
        assert!(output_dir.join("5-0dBZ.png").exists());
        assert!(output_dir.join("5-0dBZ_mask.png").exists());

        let log = fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("5-0dBZ       532900 pixels"));
        assert!(log.contains("failed saves: 0"));
    }

    #[test]
    fn test_execute_missing_input_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.png");

        let matches = build_cli()
            .try_get_matches_from(["radarbands", input.to_str().unwrap(), "-o", dir.path().to_str().unwrap()])
            .unwrap();

        let logger = Logger::new(dir.path().join("run.log")).unwrap();
        let legend = Legend::radar_default().unwrap();
        let result = ExtractCommand::new(&matches, &logger, &legend).unwrap().execute();

        assert!(matches!(result, Err(BandError::ImageLoad { .. })));
    }
}
