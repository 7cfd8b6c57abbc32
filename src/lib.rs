//! # prepend-license
//!
//! Prepends the Engine3D GPLv3 license header to source files, in place.
//!
//! Each target file is read in full and rewritten as the header followed by
//! its original bytes. Existing headers are not detected, so running the tool
//! twice on a file leaves two headers in it.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use prepend_license::processor::{FailurePolicy, HeaderPrepender};
//!
//! fn main() -> anyhow::Result<()> {
//!     let prepender = HeaderPrepender::new().failure_policy(FailurePolicy::KeepGoing);
//!
//!     let report = prepender.process_all(&["Engine3D/Camera.cpp", "Engine3D/Camera.hpp"])?;
//!
//!     for (path, err) in &report.failed {
//!         eprintln!("{}: {}", path.display(), err);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Reading and rewriting target files
//! * [`license`] - The header text
//! * [`error`] - The error type for file access failures
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`license`]: crate::license
//! [`error`]: crate::error
//! [`logging`]: crate::logging

pub mod cli;
pub mod error;
pub mod license;
pub mod logging;
pub mod output;
pub mod processor;
