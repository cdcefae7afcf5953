//! Asset values with optional principal tracking.

use super::AssetRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A set of named asset values.
///
/// Principals (cost basis) are tracked in a parallel map that is either
/// absent entirely or present with a subset of the value keys. An absent map
/// means principal tracking was never requested, which is distinct from a
/// present map of zeros.
///
/// # Example
///
/// ```rust
/// use allocater_core::AssetSet;
///
/// let mut assets = AssetSet::from_values([("Stock", 50_000.0), ("Bond", 30_000.0)]);
/// assets.set("Cash", 20_000.0);
///
/// assert_eq!(assets.get("Bond"), 30_000.0);
/// assert_eq!(assets.get("Gold"), 0.0);
/// assert_eq!(assets.total_value(), 100_000.0);
/// assert!(assets.principals().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetSet {
    values: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    principals: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
}

impl AssetSet {
    /// Creates an empty asset set without principal tracking.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an asset set from explicit parts.
    #[must_use]
    pub fn from_parts(
        values: BTreeMap<String, f64>,
        principals: Option<BTreeMap<String, f64>>,
        date: Option<String>,
    ) -> Self {
        Self {
            values,
            principals,
            date,
        }
    }

    /// Creates an asset set from (name, value) pairs, without principals.
    #[must_use]
    pub fn from_values<I, K>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Self::default()
        }
    }

    /// Builds an asset set from loader records.
    ///
    /// The last value wins when a name repeats. Principals are recorded only
    /// for records that carry one; when no record does, the result has no
    /// principal map at all.
    #[must_use]
    pub fn from_records<I>(records: I, date: Option<String>) -> Self
    where
        I: IntoIterator<Item = AssetRecord>,
    {
        let mut values = BTreeMap::new();
        let mut principals = BTreeMap::new();

        for record in records {
            if let Some(principal) = record.principal {
                principals.insert(record.name.clone(), principal);
            }
            values.insert(record.name, record.value);
        }

        Self {
            values,
            principals: (!principals.is_empty()).then_some(principals),
            date,
        }
    }

    /// Sets the date label.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Returns the value for `name`, or 0.0 if absent.
    #[must_use]
    pub fn get(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    /// Inserts or overwrites the value for `name`.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Returns true if `name` has a value entry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the principal for `name`, if principals are tracked and the
    /// name has one.
    #[must_use]
    pub fn principal(&self, name: &str) -> Option<f64> {
        self.principals.as_ref()?.get(name).copied()
    }

    /// Returns asset labels in map order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// Returns the value map.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, f64> {
        &self.values
    }

    /// Returns the principal map, if tracked.
    #[must_use]
    pub fn principals(&self) -> Option<&BTreeMap<String, f64>> {
        self.principals.as_ref()
    }

    /// Returns the date label, if any.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Returns the number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the sum of all values.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.values.values().sum()
    }

    /// Returns the sum of all principals, or `None` when not tracked.
    #[must_use]
    pub fn total_principal(&self) -> Option<f64> {
        self.principals.as_ref().map(|p| p.values().sum())
    }

    /// Returns the key-wise sum of values with `other`.
    ///
    /// This is a value-only merge: the result carries neither principals
    /// nor a date.
    #[must_use]
    pub fn merge(&self, other: &AssetSet) -> AssetSet {
        let mut merged = self.values.clone();
        for (name, value) in &other.values {
            *merged.entry(name.clone()).or_insert(0.0) += value;
        }
        AssetSet {
            values: merged,
            ..AssetSet::default()
        }
    }
}

impl fmt::Display for AssetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Assets({} items, total={:.2})",
            self.values.len(),
            self.total_value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> AssetSet {
        AssetSet::from_values([("US Stock", 50_000.0), ("Bond", 30_000.0), ("Cash", 20_000.0)])
    }

    #[test]
    fn test_get_set() {
        let mut assets = sample();
        assert_eq!(assets.get("Bond"), 30_000.0);
        assert_eq!(assets.get("Gold"), 0.0);

        assets.set("Gold", 5_000.0);
        assets.set("Bond", 31_000.0);
        assert_eq!(assets.get("Gold"), 5_000.0);
        assert_eq!(assets.get("Bond"), 31_000.0);
        assert_eq!(assets.len(), 4);
    }

    #[test]
    fn test_total_value() {
        assert_relative_eq!(sample().total_value(), 100_000.0);
        assert_eq!(AssetSet::new().total_value(), 0.0);
    }

    #[test]
    fn test_names_sorted() {
        assert_eq!(sample().names(), vec!["Bond", "Cash", "US Stock"]);
    }

    #[test]
    fn test_merge() {
        let a = AssetSet::from_values([("A", 1.0), ("B", 2.0)]);
        let b = AssetSet::from_values([("B", 3.0), ("C", 4.0)]);
        let merged = a.merge(&b);

        assert_eq!(merged.get("A"), 1.0);
        assert_eq!(merged.get("B"), 5.0);
        assert_eq!(merged.get("C"), 4.0);
        assert!(merged.principals().is_none());
    }

    #[test]
    fn test_merge_drops_principals_and_date() {
        let a = AssetSet::from_records(
            [AssetRecord::new("A", 120.0).with_principal(100.0)],
            Some("2025-01-31".into()),
        );
        let merged = a.merge(&AssetSet::new());
        assert_eq!(merged.values(), a.values());
        assert!(merged.principals().is_none());
        assert!(merged.date().is_none());
    }

    #[test]
    fn test_from_records_principals() {
        let assets = AssetSet::from_records(
            [
                AssetRecord::new("A", 120_000.0).with_principal(100_000.0),
                AssetRecord::new("B", 60_000.0),
            ],
            None,
        );
        let principals = assets.principals().unwrap();
        assert_eq!(principals.len(), 1);
        assert_eq!(assets.principal("A"), Some(100_000.0));
        assert_eq!(assets.principal("B"), None);
        assert_eq!(assets.total_principal(), Some(100_000.0));
    }

    #[test]
    fn test_from_records_without_principals() {
        let assets = AssetSet::from_records(
            [AssetRecord::new("A", 1.0), AssetRecord::new("B", 2.0)],
            Some("2025-06-30".into()),
        );
        assert!(assets.principals().is_none());
        assert!(assets.total_principal().is_none());
        assert_eq!(assets.date(), Some("2025-06-30"));
    }

    #[test]
    fn test_from_records_last_value_wins() {
        let assets = AssetSet::from_records(
            [AssetRecord::new("A", 1.0), AssetRecord::new("A", 7.0)],
            None,
        );
        assert_eq!(assets.len(), 1);
        assert_eq!(assets.get("A"), 7.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "Assets(3 items, total=100000.00)");
    }

    #[test]
    fn test_serde_omits_absent_principals() {
        let json = serde_json::to_string(&AssetSet::from_values([("A", 1.0)])).unwrap();
        assert!(!json.contains("principals"));
        let parsed: AssetSet = serde_json::from_str(&json).unwrap();
        assert!(parsed.principals().is_none());
    }
}
