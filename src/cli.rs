//! Command-line interface definition.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{kmer::KmerLength, reader::SequenceFormat};

/// K-mer counting and pulldown/input enrichment for RNA Bind-n-Seq libraries.
#[derive(Parser, Debug)]
#[command(name = "kmerich")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress informational output on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count k-mers across every read of a FASTA/FASTQ file
    Count {
        /// K-mer length (1-12)
        #[arg(value_parser = parse_k)]
        k: KmerLength,

        /// Path to a FASTA or FASTQ file
        path: PathBuf,

        /// Input format
        #[arg(long, value_enum, default_value_t = SequenceFormat::Auto)]
        input_format: SequenceFormat,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,

        /// Minimum count threshold (k-mers below this are excluded)
        #[arg(short, long, default_value = "1")]
        min_count: i64,

        /// Report frequencies instead of raw counts
        #[arg(long)]
        frequencies: bool,

        /// Keep k-mers containing characters other than A, C, G, T
        #[arg(long, conflicts_with = "frequencies")]
        all: bool,
    },

    /// Compute per-k-mer enrichment of a pulldown library over an input library
    Enrich {
        /// K-mer length (1-12)
        #[arg(value_parser = parse_k)]
        k: KmerLength,

        /// Path to the pulldown (bound) library
        pulldown: PathBuf,

        /// Path to the input (background) library
        input: PathBuf,

        /// Input format for both libraries
        #[arg(long, value_enum, default_value_t = SequenceFormat::Auto)]
        input_format: SequenceFormat,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,

        /// Only report the N most enriched k-mers, highest first
        #[arg(short, long)]
        top: Option<usize>,
    },
}

/// Output format for k-mer tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Tab-separated values (kmer\tvalue)
    #[default]
    Tsv,
    /// JSON array of {"kmer", "value"} objects
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tsv => write!(f, "tsv"),
            Self::Json => write!(f, "json"),
        }
    }
}

fn parse_k(s: &str) -> Result<KmerLength, String> {
    let k: i64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    KmerLength::try_from(k).map_err(|e| e.to_string())
}
