//! rx - pharmacy console session tool
//!
//! # Examples
//!
//! ```bash
//! # Log in to a tenant
//! rx login --username alice --password secret --tenant acme
//!
//! # See where the guard would send a browser
//! rx resolve https://other.example.com/orders --pretty
//!
//! # Call the API with the stored session
//! rx get /api/v1/inventory
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use rx_cli::{CliResult, SessionContext, logger, session_commands};
use rx_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match setup(cli.config_dir) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result: CliResult<Value> = match cli.command {
        Commands::Login {
            username,
            password,
            tenant,
        } => session_commands::login(&ctx, &username, &password, tenant.as_deref()).await,
        Commands::Logout => session_commands::logout(&ctx),
        Commands::Resolve { url } => session_commands::resolve(&ctx, &url),
        Commands::Status => session_commands::status(&ctx),
        Commands::Get { path } => match ctx.client() {
            Ok(client) => client.get(&path).await.map_err(Into::into),
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate config, start logging.
fn setup(config_dir: Option<PathBuf>) -> CliResult<SessionContext> {
    let config_dir = match config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|file| config_dir.join(file));
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    Ok(SessionContext::new(config, &config_dir))
}
