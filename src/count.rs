//! Sliding-window k-mer counting.
//!
//! Counting does no alphabet filtering: every window is tallied exactly as it
//! appears, `N`s and lowercase included. Use
//! [`filter_to_valid_kmers`](crate::filter::filter_to_valid_kmers) afterwards
//! to keep only canonical k-mers.

use crate::table::CountTable;

#[cfg(feature = "tracing")]
use tracing::{debug, info};

/// Counts every overlapping substring of length `k` in `seq`.
///
/// A sequence with `n` characters has `n - k + 1` windows. A sequence shorter
/// than `k` yields an empty table. Windows are taken over characters, so
/// multi-byte input never splits a character.
///
/// `k = 0` is not rejected: it counts the empty string `n + 1` times.
///
/// # Example
///
/// ```rust
/// use kmerich::count::count_kmers;
///
/// let counts = count_kmers("ABCDE", 2);
/// assert_eq!(counts.len(), 4);
/// assert_eq!(counts.get("AB"), Some(&1));
/// assert!(count_kmers("AB", 5).is_empty());
/// ```
pub fn count_kmers(seq: &str, k: usize) -> CountTable {
    let mut counts = CountTable::new();
    tally(&mut counts, seq, k);
    counts
}

/// Counts k-mers across every sequence of a library.
///
/// Windows never span two sequences; the result equals the sum of
/// [`count_kmers`] over each sequence.
///
/// # Example
///
/// ```rust
/// use kmerich::count::count_library;
///
/// let counts = count_library(["ACG", "CGT"], 2);
/// assert_eq!(counts.get("CG"), Some(&2));
/// assert_eq!(counts.get("GC"), None);
/// ```
pub fn count_library<I, S>(sequences: I, k: usize) -> CountTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = CountTable::new();

    for seq in sequences {
        tally(&mut counts, seq.as_ref(), k);
    }

    #[cfg(feature = "tracing")]
    info!(
        distinct_kmers = counts.len(),
        windows = counts.total(),
        k,
        "Counted k-mers across library"
    );

    counts
}

fn tally(counts: &mut CountTable, seq: &str, k: usize) {
    // Byte offset of every character, plus the end of the string.
    let bounds: Vec<usize> = seq
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(seq.len()))
        .collect();
    let n_chars = bounds.len() - 1;

    if n_chars < k {
        return;
    }
    let n_windows = n_chars - k + 1;

    #[cfg(feature = "tracing")]
    debug!(len = n_chars, windows = n_windows, k, "Counting sequence");

    for i in 0..n_windows {
        let window = &seq[bounds[i]..bounds[i + k]];
        *counts.entry_mut(window.to_string()) += 1;
    }
}
