//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! It encapsulates synchronous file operations. Every handle opened here is
//! dropped before the function returns, on success and on error.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use tracing::trace;

use crate::error::{FileAccessError, FileOp};

/// Prefix for the sibling temporary file used by atomic writes.
const TEMP_FILE_PREFIX: &str = ".prepend-license-";

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Read full file content as raw bytes.
  ///
  /// The file is opened, read to the end and closed before this returns, so a
  /// subsequent write to the same path never races the read.
  pub fn read_full_content(path: &Path) -> Result<Vec<u8>, FileAccessError> {
    let content = fs::read(path).map_err(|e| FileAccessError::from_io(FileOp::Read, path, e))?;
    trace!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
  }

  /// Truncate `path` and write `header` followed by `content`.
  ///
  /// No rollback: if a write fails midway the file is left empty or partial.
  pub fn write_file(path: &Path, header: &[u8], content: &[u8]) -> Result<(), FileAccessError> {
    let to_err = |e: std::io::Error| FileAccessError::from_io(FileOp::Write, path, e);

    let mut file = fs::File::create(path).map_err(to_err)?;
    file.write_all(header).map_err(to_err)?;
    file.write_all(content).map_err(to_err)?;
    file.flush().map_err(to_err)?;

    trace!("Wrote {} bytes to {}", header.len() + content.len(), path.display());
    Ok(())
  }

  /// Write `header` followed by `content` to a temporary file next to the
  /// target, then rename it over the target.
  ///
  /// Symlinks are resolved first so the file they point to is replaced and the
  /// link itself stays in place. The target must be writable, as it must for
  /// [`FileIO::write_file`]. It keeps its permissions. On failure the
  /// temporary file is removed and the target is left as it was.
  pub fn write_file_atomic(path: &Path, header: &[u8], content: &[u8]) -> Result<(), FileAccessError> {
    let to_err = |e: std::io::Error| FileAccessError::from_io(FileOp::Write, path, e);

    let target = fs::canonicalize(path).map_err(to_err)?;
    drop(fs::OpenOptions::new().write(true).open(&target).map_err(to_err)?);

    let dir = match target.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let permissions = fs::metadata(&target).map_err(to_err)?.permissions();

    let mut tmp = tempfile::Builder::new()
      .prefix(TEMP_FILE_PREFIX)
      .tempfile_in(dir)
      .map_err(to_err)?;
    tmp.write_all(header).map_err(to_err)?;
    tmp.write_all(content).map_err(to_err)?;
    tmp.as_file().sync_all().map_err(to_err)?;
    tmp.as_file().set_permissions(permissions).map_err(to_err)?;

    trace!("Replacing {} with {}", target.display(), tmp.path().display());
    tmp.persist(&target).map_err(|e| to_err(e.error))?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_read_full_content_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.cpp");

    let err = FileIO::read_full_content(&path).unwrap_err();
    assert!(matches!(err, FileAccessError::NotFound { op: FileOp::Read, .. }));
    assert!(!path.exists());
  }

  #[test]
  fn test_write_file_truncates_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.cpp");
    fs::write(&path, "a much longer original body that must disappear").unwrap();

    FileIO::write_file(&path, b"/* H */\n", b"x").unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"/* H */\nx");
  }

  #[test]
  fn test_write_file_atomic_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("b.hpp");
    fs::write(&path, "old").unwrap();

    FileIO::write_file_atomic(&path, b"/* H */\n", b"old").unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"/* H */\nold");

    let leftovers: Vec<_> = fs::read_dir(dir.path())
      .unwrap()
      .filter_map(|e| e.ok())
      .filter(|e| e.file_name().to_string_lossy().starts_with(TEMP_FILE_PREFIX))
      .collect();
    assert!(leftovers.is_empty());
  }

  #[test]
  fn test_write_file_atomic_missing_target() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gone.cpp");

    let err = FileIO::write_file_atomic(&path, b"/* H */\n", b"").unwrap_err();
    assert!(matches!(err, FileAccessError::NotFound { op: FileOp::Write, .. }));
    assert!(!path.exists());
  }

  #[cfg(unix)]
  #[test]
  fn test_write_file_atomic_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("run.sh");
    fs::write(&path, "echo hi\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

    FileIO::write_file_atomic(&path, b"/* H */\n", b"echo hi\n").unwrap();
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
  }

  #[cfg(unix)]
  #[test]
  fn test_write_file_atomic_writes_through_symlink() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let real = dir.path().join("real.cpp");
    let link = dir.path().join("link.cpp");
    fs::write(&real, "body").unwrap();
    symlink(&real, &link).unwrap();

    FileIO::write_file_atomic(&link, b"/* H */\n", b"body").unwrap();

    assert_eq!(fs::read(&real).unwrap(), b"/* H */\nbody");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
  }
}
