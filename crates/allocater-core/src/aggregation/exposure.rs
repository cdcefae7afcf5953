//! Per-class exposure summary of an aggregated asset set.

use crate::types::AssetSet;
use serde::{Deserialize, Serialize};

/// Exposure of a single class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassExposure {
    /// Class label.
    pub class: String,

    /// Aggregated value.
    pub value: f64,

    /// Aggregated principal, when tracked.
    pub principal: Option<f64>,

    /// Value minus principal, when principal is tracked.
    pub gain: Option<f64>,

    /// Share of total value as a percentage (0-100).
    pub weight_pct: f64,
}

/// Exposure of every class in an asset set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureSummary {
    /// Rows in asset-set order.
    pub classes: Vec<ClassExposure>,

    /// Total value across all classes.
    pub total_value: f64,

    /// Total principal, when tracked.
    pub total_principal: Option<f64>,
}

impl ExposureSummary {
    /// Returns the row for a class.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&ClassExposure> {
        self.classes.iter().find(|c| c.class == class)
    }

    /// Returns total gain, when principal is tracked.
    #[must_use]
    pub fn total_gain(&self) -> Option<f64> {
        self.total_principal.map(|p| self.total_value - p)
    }

    /// Returns rows sorted by value descending.
    #[must_use]
    pub fn sorted_by_value(&self) -> Vec<&ClassExposure> {
        let mut result: Vec<_> = self.classes.iter().collect();
        result.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        result
    }

    /// Returns rows sorted by class label.
    #[must_use]
    pub fn sorted_by_class(&self) -> Vec<&ClassExposure> {
        let mut result: Vec<_> = self.classes.iter().collect();
        result.sort_by(|a, b| a.class.cmp(&b.class));
        result
    }

    /// Returns the number of classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

/// Summarizes an asset set (typically an aggregation result) by class.
///
/// Weights are zero when the total value is zero.
#[must_use]
pub fn exposures(assets: &AssetSet) -> ExposureSummary {
    let total_value = assets.total_value();
    let tracked = assets.principals().is_some();

    let classes = assets
        .values()
        .iter()
        .map(|(class, &value)| {
            let principal = tracked.then(|| assets.principal(class).unwrap_or(0.0));
            ClassExposure {
                class: class.clone(),
                value,
                principal,
                gain: principal.map(|p| value - p),
                weight_pct: if total_value == 0.0 {
                    0.0
                } else {
                    value / total_value * 100.0
                },
            }
        })
        .collect();

    ExposureSummary {
        classes,
        total_value,
        total_principal: assets.total_principal(),
    }
}
