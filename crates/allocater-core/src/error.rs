//! Error types for allocation and aggregation.
//!
//! This module defines the hard failures of the core crate. Non-fatal
//! conditions are reported through [`crate::diagnostics`] instead.

use thiserror::Error;

/// Result type for allocation operations.
pub type AllocResult<T> = Result<T, AllocError>;

/// Errors that can occur while building or normalizing allocations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocError {
    /// Ratio sum exceeds 1.0 beyond the tolerance.
    #[error("Allocation sum for '{name}' exceeds 1.0 (sum={sum:.6})")]
    RatioOverflow {
        /// The allocation (asset) name.
        name: String,
        /// The offending ratio sum.
        sum: f64,
    },

    /// Normalization requested for an allocation whose ratios sum to zero.
    #[error("Cannot normalize allocation '{name}' with zero total")]
    ZeroTotal {
        /// The allocation (asset) name.
        name: String,
    },

    /// A single ratio is negative or not a finite number.
    #[error("Invalid ratio for '{name}' class '{class}': {value}")]
    InvalidRatio {
        /// The allocation (asset) name.
        name: String,
        /// The class carrying the bad ratio.
        class: String,
        /// The invalid ratio value.
        value: f64,
    },
}

impl AllocError {
    /// Create a ratio overflow error.
    #[must_use]
    pub fn ratio_overflow(name: impl Into<String>, sum: f64) -> Self {
        Self::RatioOverflow {
            name: name.into(),
            sum,
        }
    }

    /// Create a zero total error.
    #[must_use]
    pub fn zero_total(name: impl Into<String>) -> Self {
        Self::ZeroTotal { name: name.into() }
    }

    /// Create an invalid ratio error.
    #[must_use]
    pub fn invalid_ratio(name: impl Into<String>, class: impl Into<String>, value: f64) -> Self {
        Self::InvalidRatio {
            name: name.into(),
            class: class.into(),
            value,
        }
    }

    /// Returns the allocation name the error refers to.
    #[must_use]
    pub fn allocation_name(&self) -> &str {
        match self {
            Self::RatioOverflow { name, .. }
            | Self::ZeroTotal { name }
            | Self::InvalidRatio { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AllocError::ratio_overflow("S&P500", 1.2);
        assert!(err.to_string().contains("S&P500"));
        assert!(err.to_string().contains("1.200000"));

        let err = AllocError::zero_total("Bond");
        assert!(err.to_string().contains("Bond"));
        assert!(err.to_string().contains("zero total"));

        let err = AllocError::invalid_ratio("Fund", "US", -0.1);
        assert!(err.to_string().contains("Fund"));
        assert!(err.to_string().contains("US"));
    }

    #[test]
    fn test_allocation_name() {
        assert_eq!(AllocError::zero_total("A").allocation_name(), "A");
        assert_eq!(AllocError::ratio_overflow("B", 2.0).allocation_name(), "B");
        assert_eq!(
            AllocError::invalid_ratio("C", "X", f64::NAN).allocation_name(),
            "C"
        );
    }
}
