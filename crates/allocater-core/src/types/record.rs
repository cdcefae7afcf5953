//! Flat input records handed over by loaders.

use serde::{Deserialize, Serialize};

/// One asset row: a name, its current value and optional cost basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Asset label.
    pub name: String,
    /// Current value.
    pub value: f64,
    /// Cost basis, when the source supplied one.
    #[serde(default)]
    pub principal: Option<f64>,
}

impl AssetRecord {
    /// Creates a record without a principal.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            principal: None,
        }
    }

    /// Sets the principal.
    #[must_use]
    pub fn with_principal(mut self, principal: f64) -> Self {
        self.principal = Some(principal);
        self
    }
}

/// One allocation row: the share of asset `name` assigned to `class`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// Asset label.
    pub name: String,
    /// Class label.
    pub class: String,
    /// Share of the asset assigned to the class.
    pub ratio: f64,
}

impl AllocationRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(name: impl Into<String>, class: impl Into<String>, ratio: f64) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            ratio,
        }
    }
}
