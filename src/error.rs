//! # Error Module
//!
//! Every failure of a header operation is a [`FileAccessError`]. The variant
//! tells missing files and permission problems apart from other I/O failures;
//! all of them keep the path, the operation and the underlying
//! [`std::io::Error`] as their source.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
  Read,
  Write,
}

impl fmt::Display for FileOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FileOp::Read => f.write_str("read"),
      FileOp::Write => f.write_str("write"),
    }
  }
}

/// Error type for reading or rewriting a target file.
#[derive(Debug, thiserror::Error)]
pub enum FileAccessError {
  /// The target path does not exist.
  #[error("Failed to {op} '{}': file not found", .path.display())]
  NotFound {
    op: FileOp,
    path: PathBuf,
    source: io::Error,
  },

  /// The process may not read or write the target path.
  #[error("Failed to {op} '{}': permission denied", .path.display())]
  PermissionDenied {
    op: FileOp,
    path: PathBuf,
    source: io::Error,
  },

  /// Any other I/O failure during the read or the write.
  #[error("Failed to {op} '{}'", .path.display())]
  Io {
    op: FileOp,
    path: PathBuf,
    source: io::Error,
  },
}

impl FileAccessError {
  /// Classifies an I/O error by its [`io::ErrorKind`].
  pub fn from_io(op: FileOp, path: &Path, source: io::Error) -> Self {
    let path = path.to_path_buf();
    match source.kind() {
      io::ErrorKind::NotFound => FileAccessError::NotFound { op, path, source },
      io::ErrorKind::PermissionDenied => FileAccessError::PermissionDenied { op, path, source },
      _ => FileAccessError::Io { op, path, source },
    }
  }

  /// The path the failed operation targeted.
  pub fn path(&self) -> &Path {
    match self {
      FileAccessError::NotFound { path, .. }
      | FileAccessError::PermissionDenied { path, .. }
      | FileAccessError::Io { path, .. } => path,
    }
  }

  /// Whether the read or the write failed.
  pub const fn op(&self) -> FileOp {
    match self {
      FileAccessError::NotFound { op, .. }
      | FileAccessError::PermissionDenied { op, .. }
      | FileAccessError::Io { op, .. } => *op,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_io_classifies_not_found() {
    let err = FileAccessError::from_io(
      FileOp::Read,
      Path::new("missing.cpp"),
      io::Error::from(io::ErrorKind::NotFound),
    );
    assert!(matches!(err, FileAccessError::NotFound { .. }));
    assert_eq!(err.op(), FileOp::Read);
    assert_eq!(err.path(), Path::new("missing.cpp"));
    assert_eq!(err.to_string(), "Failed to read 'missing.cpp': file not found");
  }

  #[test]
  fn test_from_io_classifies_permission_denied() {
    let err = FileAccessError::from_io(
      FileOp::Write,
      Path::new("locked.hpp"),
      io::Error::from(io::ErrorKind::PermissionDenied),
    );
    assert!(matches!(err, FileAccessError::PermissionDenied { .. }));
    assert_eq!(err.to_string(), "Failed to write 'locked.hpp': permission denied");
  }

  #[test]
  fn test_from_io_falls_back_to_io() {
    let err = FileAccessError::from_io(FileOp::Write, Path::new("a.cpp"), io::Error::other("disk full"));
    assert!(matches!(err, FileAccessError::Io { .. }));
    assert_eq!(err.to_string(), "Failed to write 'a.cpp'");

    let source = std::error::Error::source(&err).map(|s| s.to_string());
    assert_eq!(source.as_deref(), Some("disk full"));
  }
}
