//! Client commands.

use std::io;

use clap::{Args, Subcommand};
use hotel::config::OutputFormat;
use hotel::{Client, Error};

use crate::desk::FrontDesk;
use crate::error::CliError;
use crate::output::write_client;
use crate::utils::{create_logger, load_configuration, open_database, GlobalOptions};

/// Manage clients.
#[derive(Args)]
pub struct ClientCommand {
    #[command(subcommand)]
    action: ClientAction,
}

#[derive(Subcommand)]
enum ClientAction {
    /// Register a new client
    Register {
        /// National ID (DPI)
        #[arg(long)]
        national_id: String,

        /// First names
        #[arg(long)]
        first_names: String,

        /// Last names
        #[arg(long)]
        last_names: String,
    },

    /// Change a client's names
    Update {
        /// National ID (DPI)
        #[arg(long)]
        national_id: String,

        /// New first names
        #[arg(long)]
        first_names: String,

        /// New last names
        #[arg(long)]
        last_names: String,
    },

    /// Show a client and their reservations
    Show {
        /// National ID (DPI)
        #[arg(long)]
        national_id: String,

        /// Output format (defaults to the configured format)
        #[arg(long)]
        format: Option<OutputFormat>,
    },
}

impl ClientCommand {
    /// Execute the client command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = create_logger(global, &config);
        let mut desk = FrontDesk::open(open_database(global, &config)?)?;

        match self.action {
            ClientAction::Register {
                national_id,
                first_names,
                last_names,
            } => {
                let client = Client::new(first_names, last_names, national_id);
                logger.info(&format!("Registered client {client}"));
                desk.register_client(client)?;
            }
            ClientAction::Update {
                national_id,
                first_names,
                last_names,
            } => {
                let client = desk.update_client(&national_id, &first_names, &last_names)?;
                logger.info(&format!("Updated client {client}"));
            }
            ClientAction::Show {
                national_id,
                format,
            } => {
                let manager = desk.manager();
                let client = manager
                    .find_client(&national_id)
                    .ok_or_else(|| Error::client_not_found(&national_id))?;
                let reservations = manager.client_reservations(&national_id);
                let format = format.unwrap_or_else(|| config.output_format());
                write_client(&mut io::stdout().lock(), client, &reservations, format)?;
            }
        }

        desk.close()?;
        Ok(())
    }
}
