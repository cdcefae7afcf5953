//! Ordered collection of allocations.

use super::{Allocation, AllocationRecord};
use crate::diagnostics::Diagnostics;
use crate::error::AllocResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// An ordered collection of [`Allocation`]s, one per asset name.
///
/// # Example
///
/// ```rust
/// use allocater_core::{AllocationRecord, AllocationSet};
///
/// let set = AllocationSet::from_records([
///     AllocationRecord::new("All-Country", "US", 0.7),
///     AllocationRecord::new("All-Country", "Emerging", 0.3),
///     AllocationRecord::new("S&P500", "US", 1.0),
/// ])
/// .unwrap();
///
/// assert_eq!(set.names(), vec!["All-Country", "S&P500"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationSet {
    items: Vec<Allocation>,
}

impl AllocationSet {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds allocations from flat (name, class, ratio) records.
    ///
    /// Records are grouped by name in first-seen order. Within a group a
    /// repeated class overwrites the earlier ratio.
    ///
    /// # Errors
    ///
    /// The first allocation that fails validation aborts the whole build.
    pub fn from_records<I>(records: I) -> AllocResult<Self>
    where
        I: IntoIterator<Item = AllocationRecord>,
    {
        Self::from_records_with_diagnostics(records, &mut Diagnostics::new())
    }

    /// Builds allocations from records, recording warnings into
    /// `diagnostics`.
    ///
    /// # Errors
    ///
    /// Same as [`AllocationSet::from_records`].
    pub fn from_records_with_diagnostics<I>(
        records: I,
        diagnostics: &mut Diagnostics,
    ) -> AllocResult<Self>
    where
        I: IntoIterator<Item = AllocationRecord>,
    {
        // Group using indices to keep first-seen order
        let mut groups: Vec<(String, BTreeMap<String, f64>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            let slot = match index.get(&record.name) {
                Some(&i) => i,
                None => {
                    index.insert(record.name.clone(), groups.len());
                    groups.push((record.name, BTreeMap::new()));
                    groups.len() - 1
                }
            };
            groups[slot].1.insert(record.class, record.ratio);
        }

        let items = groups
            .into_iter()
            .map(|(name, ratios)| Allocation::with_diagnostics(name, ratios, diagnostics))
            .collect::<AllocResult<Vec<_>>>()?;

        tracing::debug!(allocations = items.len(), "built allocation set");

        Ok(Self { items })
    }

    /// Appends an allocation.
    pub fn add(&mut self, allocation: Allocation) {
        self.items.push(allocation);
    }

    /// Returns allocation names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Allocation::name).collect()
    }

    /// Returns a mapping from name to that allocation's ratios.
    ///
    /// If the same name was added twice, the later allocation wins.
    #[must_use]
    pub fn to_mapping(&self) -> BTreeMap<String, BTreeMap<String, f64>> {
        self.items
            .iter()
            .map(|a| (a.name().to_string(), a.to_mapping()))
            .collect()
    }

    /// Returns the first allocation with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Allocation> {
        self.items.iter().find(|a| a.name() == name)
    }

    /// Iterates over allocations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.items.iter()
    }

    /// Returns the number of allocations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no allocations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a copy with every allocation normalized.
    ///
    /// # Errors
    ///
    /// Fails on the first allocation whose ratios sum to zero.
    pub fn normalized(&self) -> AllocResult<Self> {
        let items = self
            .items
            .iter()
            .map(Allocation::normalize)
            .collect::<AllocResult<Vec<_>>>()?;
        Ok(Self { items })
    }
}

impl From<Vec<Allocation>> for AllocationSet {
    fn from(items: Vec<Allocation>) -> Self {
        Self { items }
    }
}

impl FromIterator<Allocation> for AllocationSet {
    fn from_iter<T: IntoIterator<Item = Allocation>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AllocationSet {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for AllocationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Allocations({} items)", self.items.len())
    }
}
