//! Non-fatal diagnostics.
//!
//! Warnings raised while building allocations or aggregating assets are
//! collected into a [`Diagnostics`] sink so callers can inspect them, and
//! each one is also emitted as a `tracing` event.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-fatal condition observed during allocation or aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Ratios summed below 1.0 and the remainder was assigned to the
    /// undefined class.
    UndefinedClassAdded {
        /// The allocation (asset) name.
        name: String,
        /// The ratio sum before completion.
        sum: f64,
        /// The mass added to the undefined class.
        missing: f64,
    },

    /// An allocation referenced an asset that is not in the asset set.
    MissingAsset {
        /// The missing asset name.
        name: String,
    },
}

impl Warning {
    /// Returns the asset or allocation name the warning is about.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::UndefinedClassAdded { name, .. } | Self::MissingAsset { name } => name,
        }
    }

    /// Returns a short code for the warning kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UndefinedClassAdded { .. } => "undefined_class_added",
            Self::MissingAsset { .. } => "missing_asset",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedClassAdded { name, sum, missing } => write!(
                f,
                "{name}: ratios sum to {sum:.2}, 'undefined' class added with {missing:.2}"
            ),
            Self::MissingAsset { name } => {
                write!(f, "Asset '{name}' not found in assets; skipped")
            }
        }
    }
}

/// Collector for [`Warning`]s.
///
/// Every pushed warning is also logged at `WARN` level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn push(&mut self, warning: Warning) {
        match &warning {
            Warning::UndefinedClassAdded { name, sum, missing } => {
                tracing::warn!(
                    allocation = %name,
                    sum = *sum,
                    missing = *missing,
                    "ratios below 1.0, undefined class added"
                );
            }
            Warning::MissingAsset { name } => {
                tracing::warn!(asset = %name, "asset not found, allocation skipped");
            }
        }
        self.warnings.push(warning);
    }

    /// Moves all warnings from `other` into this collector without
    /// re-logging them.
    pub fn append(&mut self, other: &mut Diagnostics) {
        self.warnings.append(&mut other.warnings);
    }

    /// Returns the collected warnings in the order they were raised.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Iterates over the collected warnings.
    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }

    /// Returns the number of warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Returns true if no warnings were raised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns the names of assets skipped during aggregation.
    #[must_use]
    pub fn missing_assets(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .filter_map(|w| match w {
                Warning::MissingAsset { name } => Some(name.as_str()),
                Warning::UndefinedClassAdded { .. } => None,
            })
            .collect()
    }

    /// Consumes the collector and returns the warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

impl IntoIterator for Diagnostics {
    type Item = Warning;
    type IntoIter = std::vec::IntoIter<Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.into_iter()
    }
}
