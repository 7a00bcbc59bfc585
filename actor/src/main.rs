//! Actor - grid chase game runner
//!
//! A command-line process that:
//! 1. Loads a layout and the search settings (config.toml, env, CLI)
//! 2. Plays games with a search agent against scripted ghosts
//! 3. Logs each game and a final summary, optionally as JSON on stdout

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod actor;
mod config;
mod policy;
mod stats;

use crate::actor::Actor;
use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Validate configuration
    config.validate()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let json = config.json;
    let actor = Actor::new(config)?;

    match actor.run() {
        Ok(summary) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            info!("Actor completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Actor failed: {:#}", e);
            Err(e)
        }
    }
}
