//! CLI structure and command definitions.
//!
//! Global options come first; without a subcommand the interactive menu runs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AvailabilityCommand, ClientCommand, CompletionsCommand, InitCommand, ReservationCommand,
    RoomCommand, ShellCommand, ShowDataDirCommand,
};
use crate::utils::GlobalOptions;

/// Console for managing hotel rooms, clients and reservations.
#[derive(Parser)]
#[command(name = "hotel")]
#[command(version, about = "Manage hotel rooms, clients and reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "HOTEL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "HOTEL_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "HOTEL_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Global options shared by every command.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
            busy_timeout: self.busy_timeout,
            disable_autoinit: self.disable_autoinit,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive menu (default)
    Shell(ShellCommand),

    /// Manage rooms
    Room(RoomCommand),

    /// Manage clients
    Client(ClientCommand),

    /// Manage reservations
    Reservation(ReservationCommand),

    /// List rooms available for a date range
    Availability(AvailabilityCommand),

    /// Initialize the data directory and database
    Init(InitCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
