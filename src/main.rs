use std::process;
use log::{error, Level};

use radarbands::cli::build_cli;
use radarbands::commands::{CommandFactory, RadarbandsCommandFactory};
use radarbands::constants::{DEFAULT_LOG_FILE, GLOBAL_LOG_FILE};
use radarbands::legend::Legend;
use radarbands::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { Level::Debug } else { Level::Info };
    if let Err(e) = Logger::init_global_logger(GLOBAL_LOG_FILE, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let log_file = matches
        .get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_FILE);
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    // The legend is fixed at build time; a bad entry is a fatal configuration error
    let legend = match Legend::radar_default() {
        Ok(legend) => legend,
        Err(e) => {
            error!("Failed to build legend: {}", e);
            process::exit(1);
        }
    };

    let factory = RadarbandsCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger, &legend);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };
}
