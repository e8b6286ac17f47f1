//! Room commands: add, reprice, discount, remove and list rooms.

use std::io;

use clap::{Args, Subcommand};
use hotel::config::OutputFormat;
use hotel::{Room, RoomCategory};

use crate::desk::FrontDesk;
use crate::error::CliError;
use crate::output::write_rooms;
use crate::utils::{create_logger, load_configuration, open_database, parse_rate_arg, GlobalOptions};

/// Manage rooms.
#[derive(Args)]
pub struct RoomCommand {
    #[command(subcommand)]
    action: RoomAction,
}

#[derive(Subcommand)]
enum RoomAction {
    /// Register a new room
    Add {
        /// Room number
        #[arg(long)]
        number: u32,

        /// Category: Standard, Suite or Deluxe (or 1, 2, 3)
        #[arg(long)]
        category: RoomCategory,

        /// Nightly rate
        #[arg(long, value_parser = parse_rate_arg)]
        rate: f64,
    },

    /// Set a room's nightly rate
    UpdatePrice {
        /// Room number
        #[arg(long)]
        number: u32,

        /// New nightly rate
        #[arg(long, value_parser = parse_rate_arg)]
        rate: f64,
    },

    /// Remove a room
    Remove {
        /// Room number
        #[arg(long)]
        number: u32,
    },

    /// Apply the category discount to a room's rate
    Discount {
        /// Room number
        #[arg(long)]
        number: u32,
    },

    /// List rooms
    List {
        /// Output format (defaults to the configured format)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Only show available rooms
        #[arg(long)]
        available: bool,
    },
}

impl RoomCommand {
    /// Execute the room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = create_logger(global, &config);
        let mut desk = FrontDesk::open(open_database(global, &config)?)?;

        match self.action {
            RoomAction::Add {
                number,
                category,
                rate,
            } => {
                desk.add_room(Room::new(number, category, rate))?;
                logger.info(&format!("Registered room {number}"));
            }
            RoomAction::UpdatePrice { number, rate } => {
                let room = desk.update_room_price(number, rate)?;
                logger.info(&format!("Updated {room}"));
            }
            RoomAction::Remove { number } => {
                if desk.remove_room(number)? == 0 {
                    logger.warn(&format!("No room with number {number}"));
                } else {
                    logger.info(&format!("Removed room {number}"));
                }
            }
            RoomAction::Discount { number } => {
                let room = desk.apply_discount(number)?;
                logger.info(&format!("Discounted {room}"));
            }
            RoomAction::List { format, available } => {
                let rooms: Vec<&Room> = desk
                    .manager()
                    .rooms()
                    .iter()
                    .filter(|room| !available || room.is_available())
                    .collect();
                let format = format.unwrap_or_else(|| config.output_format());
                write_rooms(&mut io::stdout().lock(), &rooms, format)?;
            }
        }

        desk.close()?;
        Ok(())
    }
}
