//! Subcommand execution for the `kmerich` binary.

use std::io::{stdout, BufWriter, Write};

use thiserror::Error;

use crate::{
    builder::EnrichmentPipeline,
    cli::{Command, OutputFormat},
    count::count_library,
    enrichment::rank_enrichment,
    error::{BuilderError, KmerichError},
    filter::{filter_min_count, filter_to_valid_kmers},
    frequency::counts_to_frequencies,
    output::write_records,
    reader::read_sequences,
    table::KmerValue,
};

#[cfg(feature = "tracing")]
use tracing::info;

/// Errors that can occur while running a subcommand.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Error reading, counting or writing.
    #[error(transparent)]
    Kmerich(#[from] KmerichError),

    /// Error from the enrichment pipeline.
    #[error(transparent)]
    Pipeline(#[from] BuilderError),
}

/// Runs `command`, writing its table to stdout.
pub fn run(command: &Command) -> Result<(), ProcessError> {
    let buf = BufWriter::new(stdout());
    run_to_writer(command, buf)
}

/// Runs `command`, writing its table to `writer`.
pub fn run_to_writer<W: Write>(command: &Command, writer: W) -> Result<(), ProcessError> {
    match command {
        Command::Count {
            k,
            path,
            input_format,
            format,
            min_count,
            frequencies,
            all,
        } => {
            #[cfg(feature = "tracing")]
            info!(k = k.get(), path = ?path, "Counting k-mers");

            let sequences = read_sequences(path, *input_format)?;
            let mut counts = count_library(&sequences, k.get());
            if !all {
                counts = filter_to_valid_kmers(&counts);
            }
            let counts = filter_min_count(&counts, *min_count);

            if *frequencies {
                let freqs = counts_to_frequencies(&counts).map_err(KmerichError::from)?;
                write_records(writer, &freqs.to_records(), *format)?;
            } else {
                write_records(writer, &counts.to_records(), *format)?;
            }
        }
        Command::Enrich {
            k,
            pulldown,
            input,
            input_format,
            format,
            top,
        } => {
            let enrichment = EnrichmentPipeline::new()
                .kmer_length(*k)
                .format(*input_format)
                .enrich_files(pulldown, input)?;

            let records: Vec<KmerValue<'_, f64>> = match top {
                Some(n) => rank_enrichment(&enrichment, *n)
                    .into_iter()
                    .map(|(kmer, value)| KmerValue { kmer, value })
                    .collect(),
                None => enrichment.to_records(),
            };
            write_enrichment(writer, &records, *format)?;
        }
    }

    Ok(())
}

fn write_enrichment<W: Write>(
    writer: W,
    records: &[KmerValue<'_, f64>],
    format: OutputFormat,
) -> Result<(), KmerichError> {
    #[cfg(feature = "tracing")]
    info!(kmers = records.len(), format = %format, "Writing enrichment table");

    write_records(writer, records, format)
}
