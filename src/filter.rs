//! Filters over count tables.

use crate::{alphabet::is_valid_kmer, table::CountTable};

/// Keeps only entries whose key is a non-empty run of `A`, `C`, `G`, `T`.
///
/// Counts are carried over unchanged, zeros included. Filtering is
/// idempotent.
///
/// # Example
///
/// ```rust
/// use kmerich::{filter::filter_to_valid_kmers, table::CountTable};
///
/// let counts = CountTable::from([("AC", 1), ("BC", 1), ("CD", 1), ("DE", 1)]);
/// assert_eq!(filter_to_valid_kmers(&counts), CountTable::from([("AC", 1)]));
/// ```
pub fn filter_to_valid_kmers(table: &CountTable) -> CountTable {
    table
        .iter()
        .filter(|(kmer, _)| is_valid_kmer(kmer))
        .map(|(kmer, &count)| (kmer, count))
        .collect()
}

/// Drops entries whose count is below `min_count`.
pub fn filter_min_count(table: &CountTable, min_count: i64) -> CountTable {
    table
        .iter()
        .filter(|(_, &count)| count >= min_count)
        .map(|(kmer, &count)| (kmer, count))
        .collect()
}
