//! Configuration for batch aggregation.

use serde::{Deserialize, Serialize};

/// Configuration for batch aggregation.
///
/// Controls whether independent (allocations, assets) pairs are aggregated
/// in parallel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum pair count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64,
        }
    }
}

impl AggregationConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AggregationConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 64);
    }

    #[test]
    fn test_sequential() {
        let config = AggregationConfig::sequential();
        assert!(!config.parallel);
        assert!(!config.should_parallelize(10_000));
    }

    #[test]
    fn test_builder() {
        let config = AggregationConfig::new().with_parallel(false).with_threshold(8);
        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 8);
    }

    #[test]
    fn test_threshold() {
        let config = AggregationConfig::default().with_threshold(10);
        assert!(!config.should_parallelize(5));
        #[cfg(feature = "parallel")]
        assert!(config.should_parallelize(100));
    }

    #[test]
    fn test_serde_defaults() {
        let config: AggregationConfig = serde_json::from_str(r#"{"parallel":false}"#).unwrap();
        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 64);
    }
}
