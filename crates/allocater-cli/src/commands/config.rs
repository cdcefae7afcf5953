//! Config command implementation.
//!
//! Shows, locates and initializes the TOML configuration file.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;
use crate::cli::OutputFormat;
use crate::config::{AppConfig, ConfigLocation};
use crate::error::CliError;
use crate::output::{print_header, print_json, print_rows, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show the configuration file location
    Path,

    /// Write a configuration file with default values
    Init(InitArgs),
}

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(
    args: ConfigArgs,
    config: &AppConfig,
    location: &ConfigLocation,
    ctx: &Context,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(config, ctx),
        ConfigCommand::Path => execute_path(location, ctx),
        ConfigCommand::Init(init_args) => execute_init(init_args, location, ctx),
    }
}

fn config_rows(config: &AppConfig) -> Vec<KeyValue> {
    vec![
        KeyValue::new("format", format!("{:?}", config.format).to_lowercase()),
        KeyValue::new("precision", config.precision.to_string()),
        KeyValue::new("sort", format!("{:?}", config.sort).to_lowercase()),
        KeyValue::new("color", config.color.to_string()),
    ]
}

/// Show the effective configuration (file values merged with flags).
fn execute_show(config: &AppConfig, ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_json(config),
        OutputFormat::Table | OutputFormat::Csv => {
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Current Configuration");
            }
            print_rows(&config_rows(config), ctx.format)
        }
    }
}

/// Show configuration file path.
fn execute_path(location: &ConfigLocation, ctx: &Context) -> Result<()> {
    let exists = location.path.exists();
    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": location.path.display().to_string(),
            "exists": exists,
        })),
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}", location.path.display());
            if !ctx.quiet && !exists {
                eprintln!("(not created yet; using defaults)");
            }
            Ok(())
        }
    }
}

/// Write a default configuration file.
fn execute_init(args: InitArgs, location: &ConfigLocation, ctx: &Context) -> Result<()> {
    let path = &location.path;
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path.clone()).into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, AppConfig::default().to_toml()?)?;
    tracing::debug!(path = %path.display(), "wrote default config");

    if !ctx.quiet {
        print_success(&format!("Wrote default configuration to {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SortOrder;

    #[test]
    fn test_config_rows() {
        let config = AppConfig {
            sort: SortOrder::Class,
            ..AppConfig::default()
        };
        let rows = config_rows(&config);
        assert_eq!(rows[0].value, "table");
        assert_eq!(rows[2].value, "class");
        assert_eq!(rows[3].value, "true");
    }
}
