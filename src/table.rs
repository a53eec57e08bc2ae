//! Tables keyed by k-mer.
//!
//! Counts, frequencies and enrichment ratios are all "k-mer string to number"
//! maps, so they share one generic [`KmerTable`]. The backing map is an
//! `FxHashMap` and has no iteration order; use [`KmerTable::sorted`] whenever
//! output has to be reproducible.

use std::{collections::HashMap, hash::BuildHasher};

use rustc_hash::FxHashMap;
use serde::Serialize;

/// A mapping from k-mer to a numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct KmerTable<V> {
    entries: FxHashMap<String, V>,
}

/// K-mer occurrence counts. Signed so that malformed external tables with
/// negative counts can be represented and rejected.
pub type CountTable = KmerTable<i64>;

/// K-mer frequencies.
pub type FrequencyTable = KmerTable<f64>;

/// Per-k-mer pulldown/input ratios ("R values").
pub type EnrichmentTable = KmerTable<f64>;

/// One table entry, used for serialization.
#[derive(Debug, Serialize)]
pub struct KmerValue<'a, V> {
    pub kmer: &'a str,
    pub value: V,
}

impl<V> Default for KmerTable<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<V> KmerTable<V> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn get(&self, kmer: &str) -> Option<&V> {
        self.entries.get(kmer)
    }

    pub fn contains(&self, kmer: &str) -> bool {
        self.entries.contains_key(kmer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(kmer, value)| (kmer.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Entries sorted lexicographically by k-mer.
    pub fn sorted(&self) -> Vec<(&str, &V)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Length of an arbitrary key, or 0 for an empty table.
    ///
    /// Keys are assumed to share one length; nothing here checks that.
    pub fn key_len(&self) -> usize {
        self.entries.keys().next().map_or(0, String::len)
    }

    pub(crate) fn insert(&mut self, kmer: String, value: V) -> Option<V> {
        self.entries.insert(kmer, value)
    }

    pub(crate) fn entry_mut(&mut self, kmer: String) -> &mut V
    where
        V: Default,
    {
        self.entries.entry(kmer).or_default()
    }

    /// Borrowed, lexicographically sorted entries ready for serialization.
    pub fn to_records(&self) -> Vec<KmerValue<'_, V>>
    where
        V: Copy,
    {
        self.sorted()
            .into_iter()
            .map(|(kmer, &value)| KmerValue { kmer, value })
            .collect()
    }
}

impl CountTable {
    /// Sum of all counts.
    pub fn total(&self) -> i64 {
        self.values().sum()
    }
}

impl<K, V> FromIterator<(K, V)> for KmerTable<V>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(kmer, value)| (kmer.into(), value))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for KmerTable<V>
where
    K: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<V, S> From<HashMap<String, V, S>> for KmerTable<V>
where
    S: BuildHasher,
{
    fn from(map: HashMap<String, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<V> From<KmerTable<V>> for HashMap<String, V> {
    fn from(table: KmerTable<V>) -> Self {
        table.entries.into_iter().collect()
    }
}

impl<V> IntoIterator for KmerTable<V> {
    type Item = (String, V);
    type IntoIter = std::collections::hash_map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V> Extend<(String, V)> for KmerTable<V> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_array_and_lookup() {
        let table = CountTable::from([("AC", 2), ("GT", 3)]);
        assert_eq!(table.get("AC"), Some(&2));
        assert_eq!(table.get("TT"), None);
        assert!(table.contains("GT"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn sorted_is_lexicographic() {
        let table = FrequencyTable::from([("T", 0.1), ("A", 0.4), ("G", 0.2), ("C", 0.3)]);
        let keys: Vec<_> = table.sorted().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "C", "G", "T"]);
    }

    #[test]
    fn key_len_of_empty_table_is_zero() {
        assert_eq!(CountTable::new().key_len(), 0);
        assert_eq!(CountTable::from([("GCCG", 1)]).key_len(), 4);
    }

    #[test]
    fn records_serialize_in_order() {
        let table = CountTable::from([("CG", 1), ("AA", 2)]);
        let json = serde_json::to_string(&table.to_records()).unwrap();
        assert_eq!(json, r#"[{"kmer":"AA","value":2},{"kmer":"CG","value":1}]"#);
    }

    #[test]
    fn hashmap_conversions() {
        let map: HashMap<String, i64> = [("A".to_string(), 1)].into();
        let table = CountTable::from(map.clone());
        let back: HashMap<String, i64> = table.into();
        assert_eq!(back, map);
    }
}
