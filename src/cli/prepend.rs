//! # Prepend Command
//!
//! This module implements the only command: prepend the license header to
//! every path given on the command line.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use tracing::debug;

use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::print_summary;
use crate::processor::{FailurePolicy, HeaderPrepender, WriteStrategy};

/// Arguments for the prepend command
#[derive(Args, Debug, Default)]
pub struct PrependArgs {
  /// Files to prepend the license header to, processed in the order given
  #[arg(required = true, value_name = "PATHS")]
  pub paths: Vec<PathBuf>,

  /// Continue with the remaining files when one fails, then exit non-zero
  #[arg(long)]
  pub keep_going: bool,

  /// Write each file through a temporary file and rename it into place
  #[arg(long)]
  pub atomic: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl PrependArgs {
  fn write_strategy(&self) -> WriteStrategy {
    if self.atomic { WriteStrategy::Atomic } else { WriteStrategy::InPlace }
  }

  fn failure_policy(&self) -> FailurePolicy {
    if self.keep_going {
      FailurePolicy::KeepGoing
    } else {
      FailurePolicy::Abort
    }
  }
}

/// Run the prepend command with the given arguments
pub fn run_prepend(args: PrependArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let prepender = HeaderPrepender::new()
    .write_strategy(args.write_strategy())
    .failure_policy(args.failure_policy());
  debug!(
    files = args.paths.len(),
    strategy = ?args.write_strategy(),
    policy = ?args.failure_policy(),
    "Starting batch"
  );

  let report = prepender.process_all(&args.paths)?;
  print_summary(&report);

  if !report.is_success() {
    bail!("{} of {} files failed", report.failed.len(), args.paths.len());
  }
  Ok(())
}
