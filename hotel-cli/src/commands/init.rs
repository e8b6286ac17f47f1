//! Init command implementation.
//!
//! Creates the data directory and an empty database ahead of first use.

use std::path::PathBuf;

use clap::Parser;
use hotel::init::{init_database, InitOptions};
use hotel::ConfigBuilder;

use crate::error::CliError;
use crate::utils::{resolve_data_dir, shorten_path, GlobalOptions};

/// Initialize the hotel data directory and database.
#[derive(Parser)]
#[command(about = "Initialize the hotel data directory and database")]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Overwrite an existing database
    #[arg(long)]
    overwrite: bool,

    /// Create a commented default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` is ignored here; this command is the explicit way
    /// to create the database.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => resolve_data_dir(global)?,
        };

        let config = ConfigBuilder::new()
            .with_data_dir(&data_dir)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let options = InitOptions::new(&data_dir)
            .with_database_file(config.database_file())
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);

        if self.dry_run {
            Self::preview(&options, &data_dir, self.overwrite, self.with_config);
            return Ok(());
        }

        let result = init_database(&options)?;

        println!("Initialized hotel data in: {}", shorten_path(&data_dir));
        if result.data_dir_created {
            println!("  - Created data directory");
        }
        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database {}", shorten_path(&result.database_path));
            } else {
                println!("  - Created database {}", shorten_path(&result.database_path));
            }
        }
        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }

    fn preview(options: &InitOptions, data_dir: &std::path::Path, overwrite: bool, with_config: bool) {
        println!("Dry-run mode: no changes will be made");
        println!();
        println!("Would initialize hotel data in: {}", data_dir.display());

        if data_dir.exists() {
            println!("  - Data directory already exists: {}", data_dir.display());
        } else {
            println!("  - Create data directory: {}", data_dir.display());
        }

        let db_path = options.database_path();
        if !db_path.exists() {
            println!("  - Create database: {}", db_path.display());
        } else if overwrite {
            println!("  - Remove existing database: {}", db_path.display());
            println!("  - Create new database: {}", db_path.display());
        } else {
            println!(
                "  - ERROR: Database already exists (use --overwrite to replace): {}",
                db_path.display()
            );
        }

        if with_config {
            let config_path = data_dir.join(hotel::config::loader::USER_CONFIG_FILE);
            if config_path.exists() {
                println!(
                    "  - Configuration file already exists (will not overwrite): {}",
                    config_path.display()
                );
            } else {
                println!("  - Create configuration file: {}", config_path.display());
            }
        }
    }
}
