//! Loading sequencing libraries from FASTA and FASTQ files.
//!
//! Every record of a file becomes one sequence of the library. Quality scores
//! and headers are discarded.

use std::{
    ffi::OsStr,
    fmt,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use bio::io::{fasta, fastq};
use clap::ValueEnum;

use crate::error::KmerichError;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Input sequence file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SequenceFormat {
    /// Detect from the file extension.
    #[default]
    Auto,
    /// FASTA (`.fa`, `.fasta`, `.fna`).
    Fasta,
    /// FASTQ (`.fq`, `.fastq`).
    Fastq,
}

impl SequenceFormat {
    /// Detects the format from a path, looking through a trailing `.gz`.
    ///
    /// Anything not recognisably FASTQ is read as FASTA.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmerich::reader::SequenceFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(SequenceFormat::from_extension(Path::new("pd.fq.gz")), SequenceFormat::Fastq);
    /// assert_eq!(SequenceFormat::from_extension(Path::new("input.fa")), SequenceFormat::Fasta);
    /// assert_eq!(SequenceFormat::from_extension(Path::new("reads.txt")), SequenceFormat::Fasta);
    /// ```
    pub fn from_extension(path: &Path) -> Self {
        let stripped = if has_extension(path, "gz") {
            path.file_stem().map(Path::new)
        } else {
            Some(path)
        };

        match stripped {
            Some(p) if has_extension(p, "fq") || has_extension(p, "fastq") => Self::Fastq,
            _ => Self::Fasta,
        }
    }

    /// Turns `Auto` into a concrete format for `path`.
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => Self::from_extension(path),
            other => other,
        }
    }
}

impl fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Fasta => write!(f, "fasta"),
            Self::Fastq => write!(f, "fastq"),
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Reads every sequence of a FASTA or FASTQ file.
///
/// With the `gzip` feature, files ending in `.gz` are decompressed on the fly.
///
/// # Errors
///
/// Returns [`KmerichError::SequenceRead`] if the file cannot be opened and
/// [`KmerichError::SequenceParse`] for malformed records or sequences that
/// are not valid UTF-8.
///
/// # Example
///
/// ```rust,no_run
/// use kmerich::reader::{read_sequences, SequenceFormat};
///
/// let reads = read_sequences("pulldown.fq.gz", SequenceFormat::Auto)?;
/// println!("{} reads", reads.len());
/// # Ok::<(), kmerich::error::KmerichError>(())
/// ```
pub fn read_sequences<P>(path: P, format: SequenceFormat) -> Result<Vec<String>, KmerichError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let source = open(path)?;
    let parse_error = |details: String| KmerichError::SequenceParse {
        details,
        path: path.to_path_buf(),
    };

    let raw: Vec<Vec<u8>> = match format.resolve(path) {
        SequenceFormat::Fastq => fastq::Reader::new(source)
            .records()
            .map(|r| r.map(|record| record.seq().to_vec()))
            .collect::<Result<_, _>>()
            .map_err(|e| parse_error(e.to_string()))?,
        SequenceFormat::Fasta | SequenceFormat::Auto => fasta::Reader::new(source)
            .records()
            .map(|r| r.map(|record| record.seq().to_vec()))
            .collect::<Result<_, _>>()
            .map_err(|e| parse_error(e.to_string()))?,
    };

    #[cfg(feature = "tracing")]
    debug!(path = ?path, sequences = raw.len(), "Read sequences from file");

    raw.into_iter()
        .map(|seq| String::from_utf8(seq).map_err(|e| parse_error(e.to_string())))
        .collect()
}

fn open(path: &Path) -> Result<Box<dyn Read>, KmerichError> {
    let file = File::open(path).map_err(|source| KmerichError::SequenceRead {
        source,
        path: PathBuf::from(path),
    })?;

    #[cfg(feature = "gzip")]
    if has_extension(path, "gz") {
        return Ok(Box::new(flate2::read::MultiGzDecoder::new(file)));
    }

    Ok(Box::new(file))
}
