//! Pulldown versus input enrichment.
//!
//! The enrichment, or R value, of a k-mer is its pulldown frequency divided by
//! its input frequency. A k-mer with no usable input signal gets R = 1: it is
//! missing from either library, or its input frequency is exactly zero. This
//! keeps the table free of infinities and division by zero, at the price of
//! hiding enrichment of k-mers too rare to show up in the input library.

use std::cmp::Ordering;

use crate::{
    error::ValidationError,
    kmer::{all_kmers, KmerLength},
    table::{EnrichmentTable, FrequencyTable},
    validate::{inferred_k, validate_frequency_table},
};

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

/// R value for k-mers without usable input signal.
pub const NEUTRAL_ENRICHMENT: f64 = 1.0;

/// Computes the R value of every possible k-mer.
///
/// k is taken from an arbitrary key of `pulldown`. Both tables are then
/// validated against that k, pulldown first. The result always has `4^k`
/// entries, one per k-mer of [`all_kmers`], whether or not it was observed.
///
/// # Errors
///
/// - [`ValidationError::EmptyDistribution`] if `pulldown` is empty.
/// - Any [`ValidationError`] from validating `pulldown` or `input`.
/// - [`ValidationError::UnsupportedLength`] if k is above
///   [`KmerLength::MAX`].
///
/// # Example
///
/// ```rust
/// use kmerich::{enrichment::compute_enrichment, table::FrequencyTable};
///
/// let pulldown = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);
/// let input = FrequencyTable::from([("A", 0.25), ("C", 0.75)]);
///
/// let r = compute_enrichment(&pulldown, &input)?;
/// assert_eq!(r.len(), 4);
/// assert_eq!(r.get("A"), Some(&2.0));
/// assert_eq!(r.get("G"), Some(&1.0));
/// # Ok::<(), kmerich::error::ValidationError>(())
/// ```
pub fn compute_enrichment(
    pulldown: &FrequencyTable,
    input: &FrequencyTable,
) -> Result<EnrichmentTable, ValidationError> {
    if pulldown.is_empty() {
        return Err(ValidationError::EmptyDistribution);
    }
    let k = inferred_k(pulldown);

    #[cfg(feature = "tracing")]
    let _span = info_span!("compute_enrichment", k).entered();

    validate_frequency_table(pulldown, k)?;
    validate_frequency_table(input, k)?;
    let k = KmerLength::new(k)?;

    let mut enrichment = EnrichmentTable::with_capacity(k.space_size());
    for kmer in all_kmers(k) {
        let r = ratio(pulldown.get(&kmer), input.get(&kmer));
        enrichment.insert(kmer, r);
    }

    #[cfg(feature = "tracing")]
    debug!(kmers = enrichment.len(), "Computed enrichment table");

    Ok(enrichment)
}

fn ratio(pulldown: Option<&f64>, input: Option<&f64>) -> f64 {
    match (pulldown, input) {
        (Some(&pd), Some(&inp)) if inp != 0.0 => pd / inp,
        _ => NEUTRAL_ENRICHMENT,
    }
}

/// The `n` most enriched k-mers, highest R first.
///
/// Ties are broken by k-mer in lexicographic order so the ranking is
/// reproducible.
///
/// # Example
///
/// ```rust
/// use kmerich::{enrichment::rank_enrichment, table::EnrichmentTable};
///
/// let r = EnrichmentTable::from([("A", 2.0), ("C", 0.5), ("G", 1.0), ("T", 1.0)]);
/// assert_eq!(rank_enrichment(&r, 2), vec![("A", 2.0), ("G", 1.0)]);
/// ```
pub fn rank_enrichment(table: &EnrichmentTable, n: usize) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = table.iter().map(|(kmer, &r)| (kmer, r)).collect();
    ranked.sort_unstable_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(b.0),
        other => other,
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<&f64>, expected: f64) {
        let actual = actual.copied().unwrap_or(f64::NAN);
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn ratios_for_observed_kmers() {
        let pulldown = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);
        let input = FrequencyTable::from([("A", 0.25), ("C", 0.75)]);
        let r = compute_enrichment(&pulldown, &input).unwrap();

        assert_eq!(r.len(), 4);
        assert_close(r.get("A"), 2.0);
        assert_close(r.get("C"), 0.5 / 0.75);
        assert_close(r.get("G"), 1.0);
        assert_close(r.get("T"), 1.0);
    }

    #[test]
    fn missing_from_input_is_neutral() {
        let pulldown = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);
        let input = FrequencyTable::from([("A", 0.25), ("G", 0.75)]);
        let r = compute_enrichment(&pulldown, &input).unwrap();

        assert_close(r.get("A"), 2.0);
        assert_close(r.get("C"), 1.0);
        assert_close(r.get("G"), 1.0);
        assert_close(r.get("T"), 1.0);
    }

    #[test]
    fn zero_input_frequency_is_neutral() {
        let pulldown = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);
        let input = FrequencyTable::from([("A", 1.0), ("C", 0.0)]);
        let r = compute_enrichment(&pulldown, &input).unwrap();

        assert_close(r.get("A"), 0.5);
        assert_close(r.get("C"), 1.0);
    }

    #[test]
    fn covers_whole_kmer_space() {
        let pulldown = FrequencyTable::from([("ACG", 1.0)]);
        let input = FrequencyTable::from([("ACG", 0.5), ("TTT", 0.5)]);
        let r = compute_enrichment(&pulldown, &input).unwrap();

        assert_eq!(r.len(), 64);
        assert_close(r.get("ACG"), 2.0);
        assert_close(r.get("TTT"), 1.0);
    }

    #[test]
    fn pulldown_not_normalized() {
        let pulldown = FrequencyTable::from([("A", 0.5), ("C", 1.0)]);
        let input = FrequencyTable::from([("A", 0.25), ("G", 0.75)]);
        assert!(matches!(
            compute_enrichment(&pulldown, &input),
            Err(ValidationError::NotNormalized { .. })
        ));
    }

    #[test]
    fn input_with_non_acgt_kmer() {
        let pulldown = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);
        let input = FrequencyTable::from([("A", 0.25), ("N", 0.75)]);
        assert!(matches!(
            compute_enrichment(&pulldown, &input),
            Err(ValidationError::NonCanonicalKmer { .. })
        ));
    }

    #[test]
    fn input_with_mixed_lengths() {
        let pulldown = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);
        let input = FrequencyTable::from([("A", 0.25), ("C", 0.75), ("GT", 0.1)]);
        assert!(matches!(
            compute_enrichment(&pulldown, &input),
            Err(ValidationError::WrongLength { expected: 1, .. })
        ));
    }

    #[test]
    fn pulldown_checked_before_input() {
        let pulldown = FrequencyTable::from([("A", 0.5), ("C", 0.6)]);
        let input = FrequencyTable::from([("A", 0.5), ("N", 0.5)]);
        assert!(matches!(
            compute_enrichment(&pulldown, &input),
            Err(ValidationError::NotNormalized { .. })
        ));
    }

    #[test]
    fn empty_pulldown_is_rejected() {
        let input = FrequencyTable::from([("A", 1.0)]);
        assert_eq!(
            compute_enrichment(&FrequencyTable::new(), &input),
            Err(ValidationError::EmptyDistribution)
        );
    }

    #[test]
    fn rank_orders_by_r_then_kmer() {
        let r = EnrichmentTable::from([("T", 1.0), ("A", 1.0), ("C", 3.0), ("G", 0.1)]);
        assert_eq!(
            rank_enrichment(&r, 10),
            vec![("C", 3.0), ("A", 1.0), ("T", 1.0), ("G", 0.1)]
        );
    }
}
