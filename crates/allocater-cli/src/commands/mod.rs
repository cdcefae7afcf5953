//! CLI command implementations.

pub mod allocate;
pub mod assets;
pub mod check;
pub mod config;
pub mod merge;

pub use allocate::AllocateArgs;
pub use assets::AssetsArgs;
pub use check::CheckArgs;
pub use config::ConfigArgs;
pub use merge::MergeArgs;

use crate::cli::{OutputFormat, SortOrder};
use crate::config::AppConfig;

/// Settings every command runs with: the config file merged with flags.
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub precision: usize,
    pub sort: SortOrder,
    pub quiet: bool,
}

impl Context {
    /// Builds the context from the effective config.
    pub fn new(config: &AppConfig, quiet: bool) -> Self {
        Self {
            format: config.format,
            precision: config.precision,
            sort: config.sort,
            quiet,
        }
    }
}
