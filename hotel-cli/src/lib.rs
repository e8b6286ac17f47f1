//! Library exports for hotel-cli.
//!
//! The binary and the integration tests drive the console through these
//! modules.

pub mod cli;
pub mod commands;
pub mod desk;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
