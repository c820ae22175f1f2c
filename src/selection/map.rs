//! The selected filters map
//!
//! Maps a category id to the ordered ids of its selected values, e.g.
//! `{ age: ["child", "teen"] }`. An absent key and an empty sequence both
//! mean "no selection for this category" and compare equal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

type RawMap = BTreeMap<String, Vec<String>>;

/// Selected value ids keyed by category id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawMap", into = "RawMap")]
pub struct SelectedFilters {
    entries: RawMap,
}

impl SelectedFilters {
    /// Create an empty map
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Selected value ids for a category (empty when nothing is selected)
    #[must_use]
    pub fn get(&self, category_id: &str) -> &[String] {
        self.entries
            .get(category_id)
            .map_or(&[] as &[String], Vec::as_slice)
    }

    /// Whether a specific value is selected in a category
    #[must_use]
    pub fn contains(&self, category_id: &str, value_id: &str) -> bool {
        self.get(category_id).iter().any(|id| id == value_id)
    }

    /// Replace the selection for a category
    ///
    /// Duplicate ids are dropped (first occurrence wins). An empty selection
    /// removes the key entirely.
    pub fn set<I, S>(&mut self, category_id: impl Into<String>, value_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let category_id = category_id.into();
        let ids = dedup(value_ids.into_iter().map(Into::into));

        if ids.is_empty() {
            self.entries.remove(&category_id);
        } else {
            self.entries.insert(category_id, ids);
        }
    }

    /// Drop every selection
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over `(category id, selected ids)` in key order
    ///
    /// Entries with an empty sequence (from external assignment) are included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(category, ids)| (category.as_str(), ids.as_slice()))
    }

    /// Number of keys present, including keys with empty sequences
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }
}

fn dedup(ids: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

impl PartialEq for SelectedFilters {
    fn eq(&self, other: &Self) -> bool {
        let non_empty = |map: &'_ RawMap| {
            map.iter()
                .filter(|(_, ids)| !ids.is_empty())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Vec<_>>()
        };
        non_empty(&self.entries) == non_empty(&other.entries)
    }
}

impl Eq for SelectedFilters {}

impl From<RawMap> for SelectedFilters {
    /// External assignment: keeps empty sequences, but still drops duplicate ids
    fn from(raw: RawMap) -> Self {
        let entries = raw
            .into_iter()
            .map(|(category, ids)| (category, dedup(ids.into_iter())))
            .collect();
        Self { entries }
    }
}

impl From<SelectedFilters> for RawMap {
    fn from(filters: SelectedFilters) -> Self {
        filters.entries
    }
}

impl<K, V, S> FromIterator<(K, V)> for SelectedFilters
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let raw: RawMap = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
            .collect();
        Self::from(raw)
    }
}
