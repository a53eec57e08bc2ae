//! Writing k-mer tables as TSV or JSON.

use std::{fmt::Display, io::Write};

use serde::Serialize;

use crate::{cli::OutputFormat, error::KmerichError, table::KmerValue};

/// Writes `records` in order.
///
/// TSV is one `kmer\tvalue` line per record. JSON is a pretty-printed array of
/// `{"kmer": .., "value": ..}` objects followed by a newline.
///
/// # Example
///
/// ```rust
/// use kmerich::{cli::OutputFormat, output::write_records, table::CountTable};
///
/// let counts = CountTable::from([("CG", 1), ("AA", 2)]);
/// let mut buf = Vec::new();
/// write_records(&mut buf, &counts.to_records(), OutputFormat::Tsv)?;
/// assert_eq!(String::from_utf8_lossy(&buf), "AA\t2\nCG\t1\n");
/// # Ok::<(), kmerich::error::KmerichError>(())
/// ```
pub fn write_records<W, V>(
    mut writer: W,
    records: &[KmerValue<'_, V>],
    format: OutputFormat,
) -> Result<(), KmerichError>
where
    W: Write,
    V: Display + Serialize,
{
    match format {
        OutputFormat::Tsv => {
            for record in records {
                writeln!(writer, "{}\t{}", record.kmer, record.value)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}
