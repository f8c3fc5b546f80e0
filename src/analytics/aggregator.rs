//! Per-country visit aggregation
//!
//! Counts are kept in first-seen order so chart categories stay stable
//! between renders of the same data.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::analytics::models::GeoRecord;

/// Insertion-ordered country label -> visit count mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryCounts {
    /// Entries in first-seen order
    entries: Vec<(String, u64)>,
    /// Label -> position in `entries`
    index: HashMap<String, usize>,
}

impl CountryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one visit for `label`
    pub fn record(&mut self, label: &str) {
        self.add(label, 1);
    }

    /// Add `count` visits for `label`, appending the label if unseen
    pub fn add(&mut self, label: &str, count: u64) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1 = self.entries[i].1.saturating_add(count),
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), count));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    /// Iterate `(label, count)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }

    /// Labels in first-seen order
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(label, _)| label.clone()).collect()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .map(|(_, count)| *count)
            .fold(0u64, u64::saturating_add)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CountryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

/// Group visits by country
///
/// Every record is counted exactly once, under its own country or under
/// `"Unknown"` when the country is missing.
pub fn aggregate(records: &[GeoRecord]) -> CountryCounts {
    let mut counts = CountryCounts::new();
    for record in records {
        counts.record(record.country_label());
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_with_unknown() {
        let records = vec![
            GeoRecord::with_country("US"),
            GeoRecord::with_country("US"),
            GeoRecord::default(),
        ];

        let counts = aggregate(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("US"), Some(2));
        assert_eq!(counts.get("Unknown"), Some(1));
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_first_seen_order() {
        let records = vec![
            GeoRecord::with_country("DE"),
            GeoRecord::default(),
            GeoRecord::with_country("BR"),
            GeoRecord::with_country("DE"),
            GeoRecord::with_country("AU"),
        ];

        let counts = aggregate(&records);
        assert_eq!(counts.labels(), vec!["DE", "Unknown", "BR", "AU"]);
    }

    #[test]
    fn test_empty_input() {
        let counts = aggregate(&[]);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.get("Unknown"), None);
    }

    #[test]
    fn test_add_saturates() {
        let mut counts = CountryCounts::new();
        counts.add("US", u64::MAX);
        counts.record("US");
        counts.add("CA", u64::MAX);

        assert_eq!(counts.get("US"), Some(u64::MAX));
        assert_eq!(counts.total(), u64::MAX);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let mut counts = CountryCounts::new();
        counts.record("SE");
        counts.add("AR", 4);
        counts.record("SE");

        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"SE":2,"AR":4}"#);
    }
}
