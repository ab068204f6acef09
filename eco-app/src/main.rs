//! eco - Recife Sustentável terminal client
//!
//! Scan waste, earn Capivaras, find smart bins and redeem rewards. All
//! reference data is mocked client-side; the only persisted state is the
//! local user directory.
//!
//! # Examples
//!
//! ```bash
//! # Run the interactive client
//! eco
//!
//! # Inspect the user directory
//! eco users list --pretty
//! eco users count
//! ```

mod app;
mod catalog;
mod cli;
mod commands;
mod error;
mod logger;
mod scanner;
mod screens;

#[cfg(test)]
mod tests;

use crate::app::App;
use crate::cli::Cli;
use crate::commands::{Commands, UserCommands};
use crate::error::Result as AppErrorResult;

use eco_store::{JsonFileDirectory, UserDirectory};

use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Some(Commands::Users { action }) => run_users_command(&config, action, cli.pretty),
        None => run_interactive(config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> AppErrorResult<eco_config::Config> {
    let config = eco_config::Config::load()?;
    config.validate()?;
    Ok(config)
}

/// Run the interactive client: logger first, then the screen loop.
async fn run_interactive(config: eco_config::Config) -> AppErrorResult<()> {
    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = eco_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting eco v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut app = App::new(&config)?;
    app.run().await
}

/// Debug subcommands operate on the directory without the screen loop.
fn run_users_command(
    config: &eco_config::Config,
    action: UserCommands,
    pretty: bool,
) -> AppErrorResult<()> {
    let mut directory = JsonFileDirectory::open(config.storage_path()?)?;

    match action {
        UserCommands::List => {
            let users = directory.list_all()?;
            let json = if pretty {
                serde_json::to_string_pretty(&users)
            } else {
                serde_json::to_string(&users)
            }?;
            println!("{json}");
        }
        UserCommands::Count => {
            println!("{}", directory.count()?);
        }
        UserCommands::Clear => {
            let removed = directory.count()?;
            directory.clear_all()?;
            println!("{removed}");
        }
    }

    Ok(())
}
