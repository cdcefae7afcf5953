//! Batch aggregation over independent inputs.
//!
//! Uses rayon when the `parallel` feature is enabled and the batch is large
//! enough according to [`AggregationConfig`].

use super::aggregate::aggregate;
use crate::types::{AggregationConfig, AllocationSet, AssetSet};

/// Applies `f` to every item and returns the results in input order.
///
/// The work is spread over the rayon pool only when the crate is built with
/// `parallel` and [`AggregationConfig::should_parallelize`] accepts the item
/// count; otherwise it runs on the calling thread.
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &AggregationConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if config.should_parallelize(items.len()) {
            use rayon::prelude::*;
            tracing::debug!(items = items.len(), "running batch on rayon pool");
            return items.par_iter().map(f).collect();
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = config;

    items.iter().map(f).collect()
}

/// Aggregates each (allocations, assets) pair independently.
///
/// Missing-asset warnings are logged but not collected; call
/// [`crate::aggregate_with_diagnostics`] per pair when they are needed.
#[must_use]
pub fn aggregate_batch(
    pairs: &[(AllocationSet, AssetSet)],
    config: &AggregationConfig,
) -> Vec<AssetSet> {
    maybe_parallel_map(pairs, config, |(allocations, assets)| {
        aggregate(allocations, assets)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AllocationRecord;

    #[test]
    fn test_maybe_parallel_map() {
        let config = AggregationConfig::sequential();
        let items = vec![1, 2, 3, 4, 5];
        let results: Vec<i32> = maybe_parallel_map(&items, &config, |x| x * 2);
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_aggregate_batch_keeps_order() {
        let allocations =
            AllocationSet::from_records([AllocationRecord::new("A", "X", 1.0)]).unwrap();
        let pairs: Vec<_> = (1..=100)
            .map(|i| {
                (
                    allocations.clone(),
                    AssetSet::from_values([("A", f64::from(i))]),
                )
            })
            .collect();

        let config = AggregationConfig::default().with_threshold(10);
        let results = aggregate_batch(&pairs, &config);

        assert_eq!(results.len(), 100);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.get("X"), (i + 1) as f64);
        }
    }
}
