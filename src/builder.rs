//! Builder pattern API for running the whole pipeline.
//!
//! [`EnrichmentPipeline`] strings the stages together: count every read of a
//! library, keep only canonical k-mers, drop rare ones, normalize, and finally
//! compare a pulldown library against an input library.
//!
//! # Example
//!
//! ```rust
//! use kmerich::builder::EnrichmentPipeline;
//!
//! let pulldown = ["GCATGCAT", "TGCATG"];
//! let input = ["ACGTACGT", "GCATTTAC", "NNGCAT"];
//!
//! let r = EnrichmentPipeline::new().k(3)?.enrich(pulldown, input)?;
//! assert_eq!(r.len(), 64);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{fmt::Debug, path::Path};

use crate::{
    count::count_library,
    enrichment::compute_enrichment,
    error::{BuilderError, KmerLengthError},
    filter::{filter_min_count, filter_to_valid_kmers},
    frequency::counts_to_frequencies,
    kmer::KmerLength,
    reader::{read_sequences, SequenceFormat},
    table::{CountTable, EnrichmentTable, FrequencyTable},
};

#[cfg(feature = "tracing")]
use tracing::info;

/// A builder for configuring the counting and enrichment pipeline.
///
/// Use [`EnrichmentPipeline::new()`] to create a builder, set at least the
/// k-mer length, then call one of the stage methods.
#[derive(Debug, Clone)]
pub struct EnrichmentPipeline {
    k: Option<KmerLength>,
    min_count: i64,
    format: SequenceFormat,
}

impl Default for EnrichmentPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrichmentPipeline {
    /// Creates a builder with default settings.
    ///
    /// Default settings:
    /// - `k`: None (must be set before counting)
    /// - `min_count`: 1 (keep every observed k-mer)
    /// - `format`: auto-detected from the file extension
    pub const fn new() -> Self {
        Self {
            k: None,
            min_count: 1,
            format: SequenceFormat::Auto,
        }
    }

    /// Sets the k-mer length.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is outside the valid range.
    pub fn k(mut self, k: usize) -> Result<Self, KmerLengthError> {
        self.k = Some(KmerLength::new(k)?);
        Ok(self)
    }

    /// Sets the k-mer length from a pre-validated `KmerLength`.
    #[must_use]
    pub fn kmer_length(mut self, k: KmerLength) -> Self {
        self.k = Some(k);
        self
    }

    /// Sets the minimum count a k-mer needs to stay in a library.
    #[must_use]
    pub fn min_count(mut self, min_count: i64) -> Self {
        self.min_count = min_count;
        self
    }

    /// Sets the format used by the `*_file` methods.
    #[must_use]
    pub fn format(mut self, format: SequenceFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the configured k-mer length, if set.
    pub const fn get_k(&self) -> Option<KmerLength> {
        self.k
    }

    /// Returns the configured minimum count.
    pub const fn get_min_count(&self) -> i64 {
        self.min_count
    }

    /// Counts canonical k-mers over a library of reads.
    pub fn count<I, S>(&self, sequences: I) -> Result<CountTable, BuilderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let k = self.k.ok_or(BuilderError::KmerLengthNotSet)?;
        let counts = filter_to_valid_kmers(&count_library(sequences, k.get()));
        Ok(filter_min_count(&counts, self.min_count))
    }

    /// Counts a library and normalizes it to frequencies.
    pub fn frequencies<I, S>(&self, sequences: I) -> Result<FrequencyTable, BuilderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(counts_to_frequencies(&self.count(sequences)?)?)
    }

    /// Computes the enrichment of a pulldown library over an input library.
    pub fn enrich<P, Q, S, T>(&self, pulldown: P, input: Q) -> Result<EnrichmentTable, BuilderError>
    where
        P: IntoIterator<Item = S>,
        Q: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let pulldown = self.frequencies(pulldown)?;
        let input = self.frequencies(input)?;
        Ok(compute_enrichment(&pulldown, &input)?)
    }

    /// Reads a FASTA/FASTQ file and counts it.
    pub fn count_file<P>(&self, path: P) -> Result<CountTable, BuilderError>
    where
        P: AsRef<Path> + Debug,
    {
        self.count(read_sequences(path, self.format)?)
    }

    /// Reads two FASTA/FASTQ files and computes pulldown over input enrichment.
    pub fn enrich_files<P, Q>(&self, pulldown: P, input: Q) -> Result<EnrichmentTable, BuilderError>
    where
        P: AsRef<Path> + Debug,
        Q: AsRef<Path> + Debug,
    {
        #[cfg(feature = "tracing")]
        info!(pulldown = ?pulldown, input = ?input, k = ?self.k, "Starting enrichment");

        let pulldown = read_sequences(pulldown, self.format)?;
        let input = read_sequences(input, self.format)?;
        self.enrich(pulldown, input)
    }
}
