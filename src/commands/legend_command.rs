//! Legend listing command

use log::info;

use crate::commands::command_traits::Command;
use crate::errors::BandResult;
use crate::legend::Legend;
use crate::utils::logger::Logger;

/// Command that prints the legend table
pub struct LegendCommand<'a> {
    logger: &'a Logger,
    legend: &'a Legend,
}

impl<'a> LegendCommand<'a> {
    pub fn new(logger: &'a Logger, legend: &'a Legend) -> Self {
        LegendCommand { logger, legend }
    }
}

impl<'a> Command for LegendCommand<'a> {
    fn execute(&self) -> BandResult<()> {
        info!("Legend has {} bands", self.legend.len());

        for entry in self.legend {
            println!("{}  mask: {}", entry, entry.mask_file_name());
        }

        self.logger.print_legend(self.legend)?;
        Ok(())
    }
}
