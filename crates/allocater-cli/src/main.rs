//! Allocater CLI - Command-line interface for asset class exposure.
//!
//! # Usage
//!
//! ```bash
//! # Decompose fund holdings into asset classes
//! allocater allocate --assets assets.csv --allocations allocations.csv
//!
//! # Validate an allocation file
//! allocater check --allocations allocations.csv
//!
//! # Summarize or merge asset files
//! allocater assets --assets assets.csv
//! allocater merge broker_a.csv broker_b.csv --output combined.csv
//!
//! # Write a default configuration file
//! allocater config init
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::config::ConfigCommand;
use commands::{ConfigArgs, Context};
use config::{AppConfig, ConfigLocation};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries command output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let location = ConfigLocation::resolve(cli.config)?;
    let config = match &cli.command {
        // These must work before a config file exists.
        Commands::Config(ConfigArgs {
            command: ConfigCommand::Path | ConfigCommand::Init(_),
        }) => AppConfig::default(),
        _ => location.load()?,
    }
    .with_format(cli.format);

    if !config.color {
        colored::control::set_override(false);
    }

    let ctx = Context::new(&config, cli.quiet);

    match cli.command {
        Commands::Allocate(args) => commands::allocate::execute(args, &ctx)?,
        Commands::Check(args) => commands::check::execute(args, &ctx)?,
        Commands::Assets(args) => commands::assets::execute(args, &ctx)?,
        Commands::Merge(args) => commands::merge::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &config, &location, &ctx)?,
    }

    Ok(())
}
