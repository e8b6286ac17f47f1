//! CLI command implementations.
//!
//! - `shell`: interactive menu (the default)
//! - `room`: add, update-price, remove, discount, list
//! - `client`: register, update, show
//! - `reservation`: book, modify, cancel
//! - `availability`: rooms bookable for a date range
//! - `init`: create the data directory and database
//! - `show_data_dir`: print the resolved data directory
//! - `completions`: shell completion scripts

pub mod availability;
pub mod client;
pub mod completions;
pub mod init;
pub mod reservation;
pub mod room;
pub mod shell;
pub mod show_data_dir;

pub use availability::AvailabilityCommand;
pub use client::ClientCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use reservation::ReservationCommand;
pub use room::RoomCommand;
pub use shell::ShellCommand;
pub use show_data_dir::ShowDataDirCommand;
