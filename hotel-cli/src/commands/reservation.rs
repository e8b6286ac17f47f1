//! Reservation commands: book, modify and cancel.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use hotel::{Reservation, ReservationKey};

use crate::desk::FrontDesk;
use crate::error::CliError;
use crate::utils::{create_logger, load_configuration, open_database, parse_date_arg, GlobalOptions};

/// Manage reservations.
#[derive(Args)]
pub struct ReservationCommand {
    #[command(subcommand)]
    action: ReservationAction,
}

#[derive(Subcommand)]
enum ReservationAction {
    /// Book a room for a client
    Book {
        /// Client national ID
        #[arg(long)]
        national_id: String,

        /// Room number
        #[arg(long)]
        room: u32,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        check_in: NaiveDate,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        check_out: NaiveDate,
    },

    /// Change the dates of the client's active reservation for a room
    Modify {
        /// Client national ID
        #[arg(long)]
        national_id: String,

        /// Room number
        #[arg(long)]
        room: u32,

        /// New check-in date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        check_in: NaiveDate,

        /// New check-out date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        check_out: NaiveDate,
    },

    /// Cancel the client's active reservation for a room
    Cancel {
        /// Client national ID
        #[arg(long)]
        national_id: String,

        /// Room number
        #[arg(long)]
        room: u32,
    },
}

impl ReservationCommand {
    /// Execute the reservation command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = create_logger(global, &config);
        let mut desk = FrontDesk::open(open_database(global, &config)?)?;

        let reservation = match self.action {
            ReservationAction::Book {
                national_id,
                room,
                check_in,
                check_out,
            } => desk.book_room(Reservation::new(
                ReservationKey::new(national_id, room),
                check_in,
                check_out,
            ))?,
            ReservationAction::Modify {
                national_id,
                room,
                check_in,
                check_out,
            } => desk.update_reservation_dates(&national_id, room, check_in, check_out)?,
            ReservationAction::Cancel { national_id, room } => {
                desk.cancel_reservation(&national_id, room)?
            }
        };

        logger.info(&format!("Reservation {}", reservation.key()));
        println!("{reservation}");

        desk.close()?;
        Ok(())
    }
}
