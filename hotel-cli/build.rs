//! Build script for hotel-cli.
//!
//! Renders the `hotel.1` man page into `OUT_DIR` with clap_mangen. Build
//! scripts cannot depend on the crate being built, so the command tree is
//! described here by hand.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Keep in step with src/cli.rs.
fn build_cli() -> Command {
    Command::new("hotel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage hotel rooms, clients and reservations")
        .long_about(
            "Console application for a small hotel. Without a subcommand an interactive \
             menu is started; subcommands perform single operations for scripting.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("HOTEL_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("HOTEL_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("HOTEL_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("shell")
                .about("Run the interactive menu (default)"),
            Command::new("room")
                .about("Manage rooms")
                .long_about("Add, reprice, discount, remove and list rooms"),
            Command::new("client")
                .about("Manage clients")
                .long_about("Register clients, change their names and show their reservations"),
            Command::new("reservation")
                .about("Manage reservations")
                .long_about("Book, modify and cancel reservations"),
            Command::new("availability")
                .about("List rooms available for a date range"),
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Create the data directory, the database and optionally a config file"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("hotel.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
