//! # Output Formatting
//!
//! Two kinds of output: line-delimited JSON records on stdout for the
//! listing tools, and styled diagnostics on stderr for humans.

#![allow(clippy::print_stderr)]

use std::io::Write;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Help styles shared by every gh tool
pub fn cli_styles() -> Styles {
  Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
}

/// Writes one JSON document per line.
pub struct RecordWriter<W: Write> {
  out: W,
  written: usize,
}

impl<W: Write> RecordWriter<W> {
  pub fn new(out: W) -> Self {
    Self { out, written: 0 }
  }

  /// Serialize `record` onto its own line.
  ///
  /// A record that fails to serialize is not written at all.
  pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
    let line = serde_json::to_vec(record).context("Failed to serialize record")?;
    self.out.write_all(&line).context("Failed to write record")?;
    self.out.write_all(b"\n").context("Failed to write record")?;
    self.written += 1;
    Ok(())
  }

  /// Write every record in order, stopping at the first failure.
  pub fn write_all<'a, T, I>(&mut self, records: I) -> Result<()>
  where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
  {
    for record in records {
      self.write(record)?;
    }
    Ok(())
  }

  /// Number of records written so far
  pub fn written(&self) -> usize {
    self.written
  }

  /// Flush and hand back the underlying writer.
  pub fn finish(mut self) -> Result<W> {
    self.out.flush().context("Failed to flush output")?;
    Ok(self.out)
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  eprintln!("{} {}", check.green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  eprintln!("{} {}", warning.yellow().bold(), message);
}

/// Format a repository name
pub fn format_repo_name(name: &str) -> String {
  name.bright_cyan().bold().to_string()
}
