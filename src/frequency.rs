//! Count to frequency normalization.

use crate::{
    alphabet::is_valid_kmer,
    error::InvalidInputError,
    table::{CountTable, FrequencyTable},
};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Converts counts into frequencies that sum to one.
///
/// Every key must be a valid k-mer and every count non-negative. An empty
/// table gives an empty table. A table whose counts are all zero has no
/// meaningful distribution; it gives `NaN` frequencies, which the
/// distribution validator then rejects.
///
/// # Errors
///
/// - [`InvalidInputError::NonCanonicalKmer`] for a key that is empty or
///   contains anything but `A`, `C`, `G`, `T`.
/// - [`InvalidInputError::NegativeCount`] for a count below zero.
///
/// # Example
///
/// ```rust
/// use kmerich::{frequency::counts_to_frequencies, table::CountTable};
///
/// let counts = CountTable::from([("GCCG", 10), ("AAAA", 5), ("CG", 5)]);
/// let freqs = counts_to_frequencies(&counts)?;
/// assert_eq!(freqs.get("GCCG"), Some(&0.5));
/// assert_eq!(freqs.get("CG"), Some(&0.25));
/// # Ok::<(), kmerich::error::InvalidInputError>(())
/// ```
pub fn counts_to_frequencies(table: &CountTable) -> Result<FrequencyTable, InvalidInputError> {
    for (kmer, &count) in table.iter() {
        if !is_valid_kmer(kmer) {
            return Err(InvalidInputError::NonCanonicalKmer {
                kmer: kmer.to_string(),
            });
        }
        if count < 0 {
            return Err(InvalidInputError::NegativeCount {
                kmer: kmer.to_string(),
                count,
            });
        }
    }

    let total = table.total();

    #[cfg(feature = "tracing")]
    debug!(total, distinct_kmers = table.len(), "Normalizing counts");

    #[allow(clippy::cast_precision_loss)]
    let frequencies = table
        .iter()
        .map(|(kmer, &count)| (kmer, count as f64 / total as f64))
        .collect();

    Ok(frequencies)
}
