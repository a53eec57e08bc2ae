//! Direct library API tests.
//!
//! These walk the pipeline stage by stage with small hand-checked tables.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kmerich::{
    alphabet::{is_canonical_base, is_valid_kmer},
    count::{count_kmers, count_library},
    enrichment::compute_enrichment,
    error::{InvalidInputError, ValidationError},
    filter::filter_to_valid_kmers,
    frequency::counts_to_frequencies,
    kmer::{all_kmers, KmerLength},
    table::{CountTable, FrequencyTable},
    validate::validate_frequency_table,
};

fn assert_close(actual: Option<&f64>, expected: f64) {
    let actual = *actual.expect("k-mer should be present");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn single_character_alphabet_checks() {
    assert!(is_canonical_base('A'));
    assert!(!is_canonical_base('U'));
    assert!(!is_valid_kmer(""));
    assert!(!is_valid_kmer("AA "));
}

#[test]
fn enumeration_rejects_k_below_one() {
    assert!(KmerLength::new(0).is_err());
    assert!(KmerLength::try_from(-1_i64).is_err());
}

#[test]
fn enumeration_k1() {
    assert_eq!(
        all_kmers(KmerLength::new(1).unwrap()),
        vec!["A", "C", "G", "T"]
    );
}

#[test]
fn count_example() {
    assert_eq!(
        count_kmers("ABCDE", 2),
        CountTable::from([("AB", 1), ("BC", 1), ("CD", 1), ("DE", 1)])
    );
    assert!(count_kmers("AB", 5).is_empty());
}

#[test]
fn filter_example() {
    let counts = CountTable::from([("AC", 1), ("BC", 1), ("CD", 1), ("DE", 1)]);
    assert_eq!(filter_to_valid_kmers(&counts), CountTable::from([("AC", 1)]));
}

#[test]
fn frequency_example() {
    let counts = CountTable::from([("GCCG", 10), ("AAAA", 5), ("CG", 5)]);
    assert_eq!(
        counts_to_frequencies(&counts).unwrap(),
        FrequencyTable::from([("GCCG", 0.5), ("AAAA", 0.25), ("CG", 0.25)])
    );
    assert!(counts_to_frequencies(&CountTable::new()).unwrap().is_empty());
}

#[test]
fn frequency_errors() {
    let non_acgt = CountTable::from([("GCCG", 10), ("H", 10)]);
    assert!(matches!(
        counts_to_frequencies(&non_acgt),
        Err(InvalidInputError::NonCanonicalKmer { kmer }) if kmer == "H"
    ));

    let negative = CountTable::from([("GCCG", 10), ("CG", -1)]);
    assert!(matches!(
        counts_to_frequencies(&negative),
        Err(InvalidInputError::NegativeCount { count: -1, .. })
    ));
}

#[test]
fn validation_examples() {
    let ok = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);
    assert!(validate_frequency_table(&ok, 1).is_ok());
    assert!(matches!(
        validate_frequency_table(&ok, 2),
        Err(ValidationError::WrongLength { .. })
    ));
    assert!(matches!(
        validate_frequency_table(&FrequencyTable::from([("A", -0.2), ("C", 0.5)]), 1),
        Err(ValidationError::NegativeFrequency { .. })
    ));
    assert!(matches!(
        validate_frequency_table(&FrequencyTable::from([("A", 0.4999), ("C", 0.5)]), 1),
        Err(ValidationError::NotNormalized { .. })
    ));
    assert!(matches!(
        validate_frequency_table(&FrequencyTable::from([("A", 0.5), ("N", 0.5)]), 1),
        Err(ValidationError::NonCanonicalKmer { .. })
    ));
}

#[test]
fn enrichment_example() {
    let pulldown = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);
    let input = FrequencyTable::from([("A", 0.25), ("C", 0.75)]);
    let r = compute_enrichment(&pulldown, &input).unwrap();

    assert_eq!(r.len(), 4);
    assert_close(r.get("A"), 2.0);
    assert_close(r.get("C"), 0.666_666_666_7);
    assert_close(r.get("G"), 1.0);
    assert_close(r.get("T"), 1.0);
}

#[test]
fn enrichment_absent_from_input_is_one() {
    let pulldown = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);
    let input = FrequencyTable::from([("A", 0.25), ("G", 0.75)]);
    let r = compute_enrichment(&pulldown, &input).unwrap();

    assert_close(r.get("C"), 1.0);
    assert!(r.values().all(|v| v.is_finite()));
}

#[test]
fn enrichment_propagates_validation_errors() {
    let good = FrequencyTable::from([("A", 0.5), ("C", 0.5)]);

    let unnormalized = FrequencyTable::from([("A", 0.5), ("C", 1.0)]);
    assert!(matches!(
        compute_enrichment(&unnormalized, &good),
        Err(ValidationError::NotNormalized { .. })
    ));

    let non_acgt = FrequencyTable::from([("A", 0.25), ("N", 0.75)]);
    assert!(matches!(
        compute_enrichment(&good, &non_acgt),
        Err(ValidationError::NonCanonicalKmer { .. })
    ));

    let mixed = FrequencyTable::from([("A", 0.25), ("C", 0.75), ("GT", 0.1)]);
    assert!(matches!(
        compute_enrichment(&good, &mixed),
        Err(ValidationError::WrongLength { .. })
    ));
}

#[test]
fn full_pipeline_over_libraries() {
    let pulldown_reads = ["TGCATGCATG", "GCATGNNCAT", "AAGCATGCAA"];
    let input_reads = ["ACGTACGTAC", "TTGACCATGG", "GGCATTAACG"];
    let k = 4;

    let pulldown =
        counts_to_frequencies(&filter_to_valid_kmers(&count_library(pulldown_reads, k))).unwrap();
    let input =
        counts_to_frequencies(&filter_to_valid_kmers(&count_library(input_reads, k))).unwrap();
    let r = compute_enrichment(&pulldown, &input).unwrap();

    assert_eq!(r.len(), 256);
    // GCAT is common in the pulldown reads and rare in the input reads.
    assert!(r.get("GCAT").copied().unwrap() > 1.0);
    // Never seen anywhere.
    assert_close(r.get("CCCC"), 1.0);
}
