//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod legend_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use legend_command::LegendCommand;

use clap::ArgMatches;
use crate::errors::BandResult;
use crate::legend::Legend;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
#[derive(Default)]
pub struct RadarbandsCommandFactory;

impl RadarbandsCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RadarbandsCommandFactory
    }
}

impl<'a> CommandFactory<'a> for RadarbandsCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
        legend: &'a Legend,
    ) -> BandResult<Box<dyn Command + 'a>> {
        if args.get_flag("list-legend") {
            Ok(Box::new(LegendCommand::new(logger, legend)))
        } else {
            // Default to band extraction
            Ok(Box::new(ExtractCommand::new(args, logger, legend)?))
        }
    }
}
