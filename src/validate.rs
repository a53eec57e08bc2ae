//! Validation of k-mer frequency distributions.

use crate::{alphabet::is_valid_kmer, error::ValidationError, table::FrequencyTable};

#[cfg(feature = "tracing")]
use tracing::warn;

/// Largest allowed distance between a distribution's total and 1.
pub const TOLERANCE: f64 = 1e-6;

/// Checks that `table` is a distribution over k-mers of length `k`.
///
/// The checks run in this order, each over every entry, and the first one to
/// fail is reported:
///
/// 1. every key has length `k`
/// 2. every key is made only of `A`, `C`, `G`, `T`
/// 3. every frequency is `>= 0` (NaN is rejected here too)
/// 4. the frequencies sum to 1 within [`TOLERANCE`]
///
/// Which entry is named when several violate the same check depends on map
/// iteration order and is not stable.
///
/// # Example
///
/// ```rust
/// use kmerich::{table::FrequencyTable, validate::validate_frequency_table};
///
/// let freqs = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);
/// assert!(validate_frequency_table(&freqs, 1).is_ok());
/// assert!(validate_frequency_table(&freqs, 2).is_err());
/// ```
pub fn validate_frequency_table(table: &FrequencyTable, k: usize) -> Result<(), ValidationError> {
    let result = check(table, k);

    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        warn!(k, error = %err, "Frequency table failed validation");
    }

    result
}

fn check(table: &FrequencyTable, k: usize) -> Result<(), ValidationError> {
    if let Some(kmer) = table.keys().find(|kmer| kmer.len() != k) {
        return Err(ValidationError::WrongLength {
            kmer: kmer.to_string(),
            expected: k,
        });
    }

    if let Some(kmer) = table.keys().find(|kmer| !is_valid_kmer(kmer)) {
        return Err(ValidationError::NonCanonicalKmer {
            kmer: kmer.to_string(),
        });
    }

    if let Some((kmer, &frequency)) = table.iter().find(|(_, &f)| f.is_nan() || f < 0.0) {
        return Err(ValidationError::NegativeFrequency {
            kmer: kmer.to_string(),
            frequency,
        });
    }

    let total: f64 = table.values().sum();
    if (total - 1.0).abs() > TOLERANCE {
        return Err(ValidationError::NotNormalized { total });
    }

    Ok(())
}

/// The k-mer length of a table, taken from an arbitrary key.
///
/// Returns 0 for an empty table.
///
/// # Example
///
/// ```rust
/// use kmerich::{table::FrequencyTable, validate::inferred_k};
///
/// assert_eq!(inferred_k(&FrequencyTable::from([("GCCG", 0.1), ("AAAA", 0.9)])), 4);
/// assert_eq!(inferred_k(&FrequencyTable::new()), 0);
/// ```
pub fn inferred_k(table: &FrequencyTable) -> usize {
    table.key_len()
}
