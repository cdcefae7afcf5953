//! Allocation ratios for a single asset.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{AllocError, AllocResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tolerance applied when comparing a ratio sum against 1.0.
pub const RATIO_TOLERANCE: f64 = 1e-6;

/// Class label that absorbs ratio mass left unassigned by an allocation.
pub const UNDEFINED_CLASS: &str = "undefined";

/// Ratio breakdown of one asset into classes.
///
/// Ratios are validated once, at construction:
///
/// - every ratio must be finite and non-negative,
/// - a sum above `1.0 + RATIO_TOLERANCE` is rejected (exactly
///   `1.0 + RATIO_TOLERANCE` is accepted),
/// - a sum at or below `1.0 - RATIO_TOLERANCE` is completed with an
///   [`UNDEFINED_CLASS`] entry carrying the missing mass.
///
/// # Example
///
/// ```rust
/// use allocater_core::Allocation;
///
/// let alloc = Allocation::new("All-Country", [("US", 0.7), ("Emerging", 0.3)]).unwrap();
/// assert_eq!(alloc.ratio("US"), Some(0.7));
///
/// let partial = Allocation::new("Top10", [("US", 0.64), ("Japan", 0.049)]).unwrap();
/// assert!(partial.ratio("undefined").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAllocation")]
pub struct Allocation {
    name: String,
    ratios: BTreeMap<String, f64>,
}

/// Unvalidated wire form of an [`Allocation`].
#[derive(Deserialize)]
struct RawAllocation {
    name: String,
    #[serde(default)]
    ratios: BTreeMap<String, f64>,
}

impl TryFrom<RawAllocation> for Allocation {
    type Error = AllocError;

    fn try_from(raw: RawAllocation) -> AllocResult<Self> {
        Self::new(raw.name, raw.ratios)
    }
}

impl Allocation {
    /// Creates a validated allocation.
    ///
    /// Auto-completion warnings are logged but not returned; use
    /// [`Allocation::with_diagnostics`] to collect them.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::RatioOverflow`] when the ratios sum above 1.0
    /// beyond tolerance, or [`AllocError::InvalidRatio`] for a negative or
    /// non-finite ratio.
    pub fn new<I, K>(name: impl Into<String>, ratios: I) -> AllocResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self::with_diagnostics(name, ratios, &mut Diagnostics::new())
    }

    /// Creates a validated allocation, recording warnings into `diagnostics`.
    ///
    /// # Errors
    ///
    /// Same as [`Allocation::new`].
    pub fn with_diagnostics<I, K>(
        name: impl Into<String>,
        ratios: I,
        diagnostics: &mut Diagnostics,
    ) -> AllocResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let ratios = ratios.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self::validated(name.into(), ratios, diagnostics)
    }

    fn validated(
        name: String,
        mut ratios: BTreeMap<String, f64>,
        diagnostics: &mut Diagnostics,
    ) -> AllocResult<Self> {
        if let Some((class, &value)) = ratios.iter().find(|(_, r)| !r.is_finite() || **r < 0.0) {
            return Err(AllocError::invalid_ratio(name, class.as_str(), value));
        }

        let sum: f64 = ratios.values().sum();

        if sum > 1.0 + RATIO_TOLERANCE {
            return Err(AllocError::ratio_overflow(name, sum));
        }

        if sum <= 1.0 - RATIO_TOLERANCE {
            let missing = 1.0 - sum;
            *ratios.entry(UNDEFINED_CLASS.to_string()).or_insert(0.0) += missing;
            diagnostics.push(Warning::UndefinedClassAdded {
                name: name.clone(),
                sum,
                missing,
            });
        }

        Ok(Self { name, ratios })
    }

    /// Returns the allocation (asset) name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a read-only view of the ratios.
    #[must_use]
    pub fn ratios(&self) -> &BTreeMap<String, f64> {
        &self.ratios
    }

    /// Returns the ratio for a class, if present.
    #[must_use]
    pub fn ratio(&self, class: &str) -> Option<f64> {
        self.ratios.get(class).copied()
    }

    /// Iterates over class labels in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.ratios.keys().map(String::as_str)
    }

    /// Returns the sum of all ratios.
    #[must_use]
    pub fn total_ratio(&self) -> f64 {
        self.ratios.values().sum()
    }

    /// Returns an independent copy of the ratios.
    #[must_use]
    pub fn to_mapping(&self) -> BTreeMap<String, f64> {
        self.ratios.clone()
    }

    /// Returns a copy whose ratios are rescaled to sum to exactly 1.0.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::ZeroTotal`] when the ratios sum to zero.
    pub fn normalize(&self) -> AllocResult<Self> {
        let total = self.total_ratio();
        if total == 0.0 {
            return Err(AllocError::zero_total(self.name.as_str()));
        }

        let ratios = self
            .ratios
            .iter()
            .map(|(class, ratio)| (class.clone(), ratio / total))
            .collect();

        Self::validated(self.name.clone(), ratios, &mut Diagnostics::new())
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Allocation(name='{}', ratios={{ ", self.name)?;
        for (i, (class, ratio)) in self.ratios.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{class}: {ratio:.2}")?;
        }
        write!(f, " }})")
    }
}
