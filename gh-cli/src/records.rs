//! Writing listing results to stdout.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use gh_core::output::RecordWriter;
use serde::Serialize;
use tracing::debug;

/// Write `records` to `out`, one JSON document per line.
///
/// The first record that cannot be serialized aborts the remaining output.
pub fn emit_records<W: Write, T: Serialize>(out: W, records: &[T]) -> Result<()> {
  let mut writer = RecordWriter::new(out);
  writer.write_all(records)?;
  debug!("Wrote {} records", writer.written());
  writer.finish()?;
  Ok(())
}

/// Write `records` to stdout, one JSON document per line.
pub fn print_records<T: Serialize>(records: &[T]) -> Result<()> {
  let stdout = io::stdout();
  emit_records(BufWriter::new(stdout.lock()), records)
}
