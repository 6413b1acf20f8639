//! Command-line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

use crate::constants::{DEFAULT_INPUT, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_DIR};

/// Build the clap command for the `radarbands` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("radarbands")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split a radar reflectivity image into per-dBZ band images and masks")
        .arg(
            Arg::new("input")
                .help("Radar image to process")
                .default_value(DEFAULT_INPUT)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory for the cropped image, band images and masks")
                .value_name("DIR")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(
            Arg::new("parallel")
                .short('p')
                .long("parallel")
                .help("Process legend bands on all cores")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-legend")
                .short('l')
                .long("list-legend")
                .help("Print the legend table and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("File receiving the run summary")
                .value_name("FILE")
                .default_value(DEFAULT_LOG_FILE),
        )
}
