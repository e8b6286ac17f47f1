//! Availability query.

use std::io;

use chrono::NaiveDate;
use clap::Args;
use hotel::config::OutputFormat;
use hotel::DateRange;

use crate::desk::FrontDesk;
use crate::error::CliError;
use crate::output::write_rooms;
use crate::utils::{create_logger, load_configuration, open_database, parse_date_arg, GlobalOptions};

/// List rooms that can be booked for a date range.
///
/// Availability is the room's current flag; the range does not narrow it.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// Start of the range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    from: NaiveDate,

    /// End of the range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    to: NaiveDate,

    /// Output format (defaults to the configured format)
    #[arg(long)]
    format: Option<OutputFormat>,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = create_logger(global, &config);
        let desk = FrontDesk::open(open_database(global, &config)?)?;

        let rooms = desk
            .manager()
            .list_available_rooms(&DateRange::new(self.from, self.to));
        logger.info(&format!("{} rooms available", rooms.len()));
        let format = self.format.unwrap_or_else(|| config.output_format());
        write_rooms(&mut io::stdout().lock(), &rooms, format)?;

        desk.close()?;
        Ok(())
    }
}
