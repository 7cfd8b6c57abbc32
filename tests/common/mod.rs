#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Header used by tests that don't need the real license text.
pub const TEST_HEADER: &str = "/* LIC */\n";

/// Writes `content` to `dir/name` and returns the full path.
pub fn write_file(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
  let path = dir.join(name);
  fs::write(&path, content).with_context(|| format!("Failed to create {}", path.display()))?;
  Ok(path)
}

/// Reads a file back as a UTF-8 string.
pub fn read_file(path: &Path) -> Result<String> {
  fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
