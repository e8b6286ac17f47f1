//! Main entry point for the hotel console.
//!
//! With no subcommand the interactive menu runs; the `room`, `client`,
//! `reservation` and `availability` subcommands perform one operation each.

use clap::Parser;
use hotel_cli::cli::{Cli, Command};
use hotel_cli::commands::ShellCommand;

fn main() {
    let cli = Cli::parse();
    let global = cli.global_options();

    let result = match cli.command {
        None => ShellCommand::default().execute(&global),
        Some(Command::Shell(cmd)) => cmd.execute(&global),
        Some(Command::Room(cmd)) => cmd.execute(&global),
        Some(Command::Client(cmd)) => cmd.execute(&global),
        Some(Command::Reservation(cmd)) => cmd.execute(&global),
        Some(Command::Availability(cmd)) => cmd.execute(&global),
        Some(Command::Init(cmd)) => cmd.execute(&global),
        Some(Command::ShowDataDir(cmd)) => cmd.execute(&global),
        Some(Command::Completions(cmd)) => cmd.execute(),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
