//! # Output Module
//!
//! This module centralizes all user-facing output for prepend-license.
//!
//! Progress goes to stdout and is silenced by `-q`. Failures go to stderr and
//! are always shown.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::info_log;
use crate::logging::is_quiet;
use crate::processor::BatchReport;

/// Symbols used in output
pub mod symbols {
  /// Success
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print the "Processing {path}..." line emitted before a file is touched.
pub fn print_processing(path: &Path) {
  info_log!("Processing {}...", path.display());
}

/// Print the "Done" line emitted after a file was rewritten.
pub fn print_done() {
  info_log!("Done");
}

/// Print the closing summary of a batch.
///
/// Only batches that recorded failures print anything: each failed path with
/// its error on stderr, then a count line.
pub fn print_summary(report: &BatchReport) {
  if report.failed.is_empty() {
    return;
  }

  if !is_quiet() {
    eprintln!();
  }

  for (path, err) in &report.failed {
    eprintln!(
      "  {} {}: {}",
      symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
      path.display(),
      err
    );
  }

  let total = report.processed.len() + report.failed.len();
  let files_word = if total == 1 { "file" } else { "files" };
  eprintln!(
    "{} of {} {} failed ({} {} processed)",
    report.failed.len(),
    total,
    files_word,
    symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green()),
    report.processed.len()
  );
}
