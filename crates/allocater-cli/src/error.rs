//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The config file named on the command line does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The config file is not valid TOML or has unknown keys.
    #[error("Invalid config file {}: {source}", .path.display())]
    ConfigParse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// A config value is out of range.
    #[error("Invalid config value for '{key}': {message}")]
    InvalidConfig {
        /// Config key.
        key: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// Refusing to overwrite an existing file.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// No platform config directory could be determined.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
