//! # prepend-license
//!
//! Prepends the Engine3D license header to every file given on the command
//! line.

use anyhow::Result;
use prepend_license::cli::{Cli, run_prepend};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_prepend(cli.prepend_args)
}
