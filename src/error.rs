//! Error types for kmerich.
//!
//! The core pipeline distinguishes three kinds of failure:
//!
//! - [`KmerLengthError`]: a k outside the supported range. This is a
//!   configuration mistake, not something to retry.
//! - [`InvalidInputError`]: a count table that cannot be normalized.
//! - [`ValidationError`]: a frequency table that is not a k-mer distribution.
//!
//! [`KmerichError`] wraps all of them together with the I/O failures of the
//! reader and output layers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in kmerich operations.
#[derive(Debug, Error)]
pub enum KmerichError {
    /// K-mer length is outside the valid range.
    #[error("invalid k-mer length {k}: must be between {min} and {max}")]
    InvalidKmerLength { k: i64, min: u8, max: u8 },

    /// A count table could not be turned into frequencies.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// A frequency table failed distribution validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failed to read sequence file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to parse sequence record.
    #[error("failed to parse sequence record in '{path}': {details}")]
    SequenceParse { details: String, path: PathBuf },

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },
}

/// Error for invalid k-mer length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("k-mer length {k} is out of range: must be between {min} and {max}")]
pub struct KmerLengthError {
    /// The invalid k value that was provided.
    pub k: i64,
    /// Minimum valid k-mer length.
    pub min: u8,
    /// Maximum valid k-mer length.
    pub max: u8,
}

/// A count table that cannot be converted into frequencies.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// A key contains something other than A, C, G or T, or is empty.
    #[error("count table contains non-ACGT k-mer {kmer:?}")]
    NonCanonicalKmer { kmer: String },

    /// A key has a count below zero.
    #[error("count table contains negative count {count} for k-mer {kmer:?}")]
    NegativeCount { kmer: String, count: i64 },
}

/// A frequency table that is not a valid k-mer distribution.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A key does not have the expected length.
    #[error("frequency table contains non-length {expected} k-mer {kmer:?}")]
    WrongLength { kmer: String, expected: usize },

    /// A key contains something other than A, C, G or T.
    #[error("frequency table contains non-ACGT k-mer {kmer:?}")]
    NonCanonicalKmer { kmer: String },

    /// A frequency is below zero.
    #[error("frequency {frequency} for k-mer {kmer:?} is negative")]
    NegativeFrequency { kmer: String, frequency: f64 },

    /// Frequencies do not sum to one.
    #[error("total frequency for all k-mers is {total}, not 1")]
    NotNormalized { total: f64 },

    /// There are no k-mers to infer a length from.
    #[error("frequency table is empty")]
    EmptyDistribution,

    /// The k-mers are too long to enumerate.
    #[error(transparent)]
    UnsupportedLength(#[from] KmerLengthError),
}

impl From<std::io::Error> for KmerichError {
    fn from(source: std::io::Error) -> Self {
        Self::WriteError { source }
    }
}

impl From<serde_json::Error> for KmerichError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonError { source }
    }
}

impl From<KmerLengthError> for KmerichError {
    fn from(err: KmerLengthError) -> Self {
        Self::InvalidKmerLength {
            k: err.k,
            min: err.min,
            max: err.max,
        }
    }
}

/// Errors that can occur when using the builder API.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// K-mer length was not set before calling a counting method.
    #[error("k-mer length not set; call .k() first")]
    KmerLengthNotSet,

    /// Invalid k-mer length provided.
    #[error(transparent)]
    KmerLength(#[from] KmerLengthError),

    /// Error from the underlying pipeline stages.
    #[error(transparent)]
    Kmerich(#[from] KmerichError),
}

impl From<InvalidInputError> for BuilderError {
    fn from(err: InvalidInputError) -> Self {
        Self::Kmerich(err.into())
    }
}

impl From<ValidationError> for BuilderError {
    fn from(err: ValidationError) -> Self {
        Self::Kmerich(err.into())
    }
}
