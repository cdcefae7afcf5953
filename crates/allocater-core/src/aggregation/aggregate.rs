//! Weighted aggregation of assets into classes.

use crate::diagnostics::{Diagnostics, Warning};
use crate::types::{AllocationSet, AssetSet};
use std::collections::BTreeMap;

/// Decomposes asset values (and principals) into class-level exposure.
///
/// Each allocation's asset value is split across its classes by ratio and
/// summed per class. Allocations whose asset is missing from `assets` are
/// skipped with a warning. Principals are aggregated only when `assets`
/// tracks them; assets without a principal contribute zero.
///
/// # Example
///
/// ```rust
/// use allocater_core::{aggregate, AllocationRecord, AllocationSet, AssetRecord, AssetSet};
///
/// let assets = AssetSet::from_records(
///     [
///         AssetRecord::new("A", 120_000.0).with_principal(100_000.0),
///         AssetRecord::new("B", 60_000.0).with_principal(50_000.0),
///     ],
///     None,
/// );
/// let allocations = AllocationSet::from_records([
///     AllocationRecord::new("A", "X", 0.7),
///     AllocationRecord::new("A", "Y", 0.3),
///     AllocationRecord::new("B", "X", 1.0),
/// ])
/// .unwrap();
///
/// let result = aggregate(&allocations, &assets);
/// assert!((result.get("X") - 144_000.0).abs() < 1e-9);
/// assert!((result.principal("Y").unwrap() - 30_000.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn aggregate(allocations: &AllocationSet, assets: &AssetSet) -> AssetSet {
    aggregate_with_diagnostics(allocations, assets, &mut Diagnostics::new())
}

/// Same as [`aggregate`], recording skipped assets into `diagnostics`.
#[must_use]
pub fn aggregate_with_diagnostics(
    allocations: &AllocationSet,
    assets: &AssetSet,
    diagnostics: &mut Diagnostics,
) -> AssetSet {
    let mut values_by_class: BTreeMap<String, f64> = BTreeMap::new();
    let mut principals_by_class: BTreeMap<String, f64> = BTreeMap::new();
    let principals = assets.principals();

    for allocation in allocations {
        let Some(&asset_value) = assets.values().get(allocation.name()) else {
            diagnostics.push(Warning::MissingAsset {
                name: allocation.name().to_string(),
            });
            continue;
        };

        let asset_principal =
            principals.map(|p| p.get(allocation.name()).copied().unwrap_or(0.0));

        for (class, ratio) in allocation.ratios() {
            *values_by_class.entry(class.clone()).or_insert(0.0) += asset_value * ratio;
            if let Some(principal) = asset_principal {
                *principals_by_class.entry(class.clone()).or_insert(0.0) += principal * ratio;
            }
        }
    }

    tracing::debug!(
        allocations = allocations.len(),
        classes = values_by_class.len(),
        tracked_principals = principals.is_some(),
        "aggregated assets by class"
    );

    AssetSet::from_parts(
        values_by_class,
        principals.map(|_| principals_by_class),
        None,
    )
}
