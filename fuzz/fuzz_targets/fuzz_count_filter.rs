//! Fuzz target for counting, filtering and normalizing arbitrary input.
//!
//! Any UTF-8 string must count without panicking, the window total must match
//! the character count, and whatever survives filtering must normalize into a
//! valid distribution.

#![no_main]

use kmerich::{
    alphabet::is_valid_kmer, count::count_kmers, filter::filter_to_valid_kmers,
    frequency::counts_to_frequencies, validate::validate_frequency_table,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&k, rest)) = data.split_first() else {
        return;
    };
    let Ok(seq) = std::str::from_utf8(rest) else {
        return;
    };
    let k = usize::from(k % 16) + 1;

    let counts = count_kmers(seq, k);
    let n = seq.chars().count();
    let expected = if n >= k { n - k + 1 } else { 0 };
    assert_eq!(counts.total(), i64::try_from(expected).unwrap());

    let valid = filter_to_valid_kmers(&counts);
    assert!(valid.keys().all(is_valid_kmer));

    let freqs = counts_to_frequencies(&valid).expect("filtered counts always normalize");
    if !freqs.is_empty() {
        assert!(validate_frequency_table(&freqs, k).is_ok());
    }
});
