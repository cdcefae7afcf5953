//! Application configuration file.
//!
//! The file is TOML. Every key is optional:
//!
//! ```toml
//! format = "table"    # table, json, csv
//! precision = 2       # decimal places for amounts
//! sort = "value"      # value, class
//! color = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::{OutputFormat, SortOrder};
use crate::error::{CliError, CliResult};

/// Largest accepted `precision`.
const MAX_PRECISION: usize = 10;

/// Effective CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Default output format.
    pub format: OutputFormat,
    /// Decimal places for amounts and percentages.
    pub precision: usize,
    /// Row ordering for exposure tables.
    pub sort: SortOrder,
    /// Whether to use colored output.
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 2,
            sort: SortOrder::Value,
            color: true,
        }
    }
}

/// Where the config file lives and whether it was named explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    /// Path of the config file.
    pub path: PathBuf,
    /// True when the path came from `--config` or `ALLOCATER_CONFIG`.
    pub explicit: bool,
}

impl ConfigLocation {
    /// Resolves the config location: the explicit path when given, else
    /// `<config_dir>/allocater/config.toml`.
    pub fn resolve(explicit: Option<PathBuf>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Ok(Self {
                path,
                explicit: true,
            });
        }

        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or(CliError::NoConfigDir)?;
        Ok(Self {
            path: base.join("allocater").join("config.toml"),
            explicit: false,
        })
    }

    /// Loads the config.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(&self) -> anyhow::Result<AppConfig> {
        if !self.path.exists() {
            if self.explicit {
                return Err(CliError::ConfigNotFound(self.path.clone()).into());
            }
            tracing::debug!(path = %self.path.display(), "no config file; using defaults");
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config = AppConfig::from_toml(&content, &self.path)?;
        tracing::debug!(path = %self.path.display(), ?config, "loaded config");
        Ok(config)
    }
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str, path: &Path) -> CliResult<Self> {
        let config: Self = toml::from_str(content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the config as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> CliResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(CliError::InvalidConfig {
                key: "precision",
                message: format!("{} is not between 0 and {MAX_PRECISION}", self.precision),
            });
        }
        Ok(())
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
