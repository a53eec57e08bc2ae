//! K-mer composition statistics for RNA Bind-n-Seq style experiments.
//!
//! The pipeline runs, for each sequencing library:
//!
//! 1. [`count::count_kmers`] / [`count::count_library`]: tally every window
//!    of length k.
//! 2. [`filter::filter_to_valid_kmers`]: drop windows with anything but
//!    `A`, `C`, `G`, `T`.
//! 3. [`frequency::counts_to_frequencies`]: normalize to a distribution.
//!
//! and then compares a pulldown library against an input library with
//! [`enrichment::compute_enrichment`], which validates both distributions
//! ([`validate::validate_frequency_table`]) and reports an R value for every
//! one of the `4^k` possible k-mers ([`kmer::all_kmers`]).
//!
//! # Example
//!
//! ```rust
//! use kmerich::{
//!     count::count_kmers, enrichment::compute_enrichment, filter::filter_to_valid_kmers,
//!     frequency::counts_to_frequencies,
//! };
//!
//! let pulldown = counts_to_frequencies(&filter_to_valid_kmers(&count_kmers("AAACN", 1)))?;
//! let input = counts_to_frequencies(&filter_to_valid_kmers(&count_kmers("ACGT", 1)))?;
//!
//! let r = compute_enrichment(&pulldown, &input)?;
//! assert_eq!(r.get("A"), Some(&3.0));
//! assert_eq!(r.get("G"), Some(&1.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every stage is a pure function over immutable tables, so independent
//! libraries can be processed on separate threads without coordination.

pub mod alphabet;
pub mod builder;
pub mod cli;
pub mod count;
pub mod enrichment;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod kmer;
pub mod output;
pub mod reader;
pub mod run;
pub mod table;
pub mod validate;
