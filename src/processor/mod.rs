//! # Processor Module
//!
//! This module contains the core functionality: prepending the license header
//! to each target file.
//!
//! The module is organized into:
//! - [`file_io`] - File reading and writing operations
//!
//! The [`HeaderPrepender`] struct is the main entry point. It reads a file in
//! full, then rewrites it as header followed by the original bytes. The
//! header is never detected or deduplicated, so processing a file twice
//! prepends it twice.

mod file_io;

use std::path::{Path, PathBuf};

pub use file_io::FileIO;
use tracing::{debug, warn};

use crate::error::FileAccessError;
use crate::license::LICENSE_TEXT;
use crate::output::{print_done, print_processing};
use crate::verbose_log;

/// How the new content reaches the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStrategy {
  /// Truncate the target and write into it. An interrupted write can leave
  /// the file empty or partial.
  #[default]
  InPlace,
  /// Write a sibling temporary file and rename it over the target.
  Atomic,
}

/// What a batch does when one file fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
  /// Stop at the first failure; later paths are not attempted.
  #[default]
  Abort,
  /// Record the failure and continue with the next path.
  KeepGoing,
}

/// Outcome of [`HeaderPrepender::process_all`], in argument order.
#[derive(Debug, Default)]
pub struct BatchReport {
  /// Paths that now start with the header.
  pub processed: Vec<PathBuf>,
  /// Paths that could not be processed. Only populated with
  /// [`FailurePolicy::KeepGoing`].
  pub failed: Vec<(PathBuf, FileAccessError)>,
}

impl BatchReport {
  /// Whether every attempted path succeeded.
  pub fn is_success(&self) -> bool {
    self.failed.is_empty()
  }
}

/// Prepends a fixed header to files, one at a time.
#[derive(Debug, Clone)]
pub struct HeaderPrepender {
  header: String,
  write_strategy: WriteStrategy,
  failure_policy: FailurePolicy,
}

impl Default for HeaderPrepender {
  fn default() -> Self {
    Self::new()
  }
}

impl HeaderPrepender {
  /// Creates a prepender for [`LICENSE_TEXT`] with in-place writes that
  /// aborts on the first failure.
  pub fn new() -> Self {
    Self::with_header(LICENSE_TEXT)
  }

  /// Creates a prepender for an arbitrary header.
  ///
  /// The header is written verbatim; include a trailing newline if the
  /// original content should start on its own line.
  pub fn with_header(header: impl Into<String>) -> Self {
    Self {
      header: header.into(),
      write_strategy: WriteStrategy::default(),
      failure_policy: FailurePolicy::default(),
    }
  }

  /// Selects how rewritten content reaches the target file.
  pub fn write_strategy(mut self, strategy: WriteStrategy) -> Self {
    self.write_strategy = strategy;
    self
  }

  /// Selects whether a batch stops or continues after a failed file.
  pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
    self.failure_policy = policy;
    self
  }

  /// Prepends the header to a single file.
  ///
  /// The whole file is read and closed before it is reopened for writing. A
  /// failed read leaves the filesystem untouched.
  pub fn process(&self, path: &Path) -> Result<(), FileAccessError> {
    print_processing(path);

    let original = FileIO::read_full_content(path)?;
    debug!(
      path = %path.display(),
      bytes = original.len(),
      strategy = ?self.write_strategy,
      "Prepending header"
    );

    match self.write_strategy {
      WriteStrategy::InPlace => FileIO::write_file(path, self.header.as_bytes(), &original)?,
      WriteStrategy::Atomic => FileIO::write_file_atomic(path, self.header.as_bytes(), &original)?,
    }

    print_done();
    Ok(())
  }

  /// Processes every path in order.
  ///
  /// With [`FailurePolicy::Abort`] the first error is returned and the
  /// remaining paths are left alone. Files processed before the error stay
  /// modified.
  pub fn process_all<P: AsRef<Path>>(&self, paths: &[P]) -> Result<BatchReport, FileAccessError> {
    let mut report = BatchReport::default();
    verbose_log!("Prepending {} byte header to {} file(s)", self.header.len(), paths.len());

    for path in paths {
      let path = path.as_ref();
      match self.process(path) {
        Ok(()) => report.processed.push(path.to_path_buf()),
        Err(err) => match self.failure_policy {
          FailurePolicy::Abort => return Err(err),
          FailurePolicy::KeepGoing => {
            warn!(path = %path.display(), error = %err, "Skipping file");
            report.failed.push((path.to_path_buf(), err));
          }
        },
      }
    }

    Ok(report)
  }
}
