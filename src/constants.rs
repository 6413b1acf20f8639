//! Fixed parameters of the radar band extraction

/// Side length of the square region cropped from the top-left corner
pub const CROP_SIZE: u32 = 730;

/// Maximum Euclidean RGB distance for a pixel to belong to a band
pub const BAND_TOLERANCE: f64 = 15.0;

/// Mask value for selected pixels
pub const MASK_SELECTED: u8 = 255;

/// Mask value for cleared pixels
pub const MASK_CLEARED: u8 = 0;

/// File name of the saved crop, written next to the band outputs
pub const CROPPED_IMAGE_NAME: &str = "cropped_image.png";

/// Suffix appended to a band label to name its mask file
pub const MASK_SUFFIX: &str = "_mask";

/// Extension of the mask files
pub const MASK_EXTENSION: &str = "png";

/// Source image used when none is given on the command line
pub const DEFAULT_INPUT: &str = "a.png";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Run summary log
pub const DEFAULT_LOG_FILE: &str = "radarbands.log";

/// Log file backing the `log` facade
pub const GLOBAL_LOG_FILE: &str = "radarbands-global.log";
