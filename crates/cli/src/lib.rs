//! Rebase Rescue CLI Library
//!
//! This crate provides the command-line interface for rebase-rescue. It parses
//! the optional overrides, builds the runner configuration and hands the run
//! over to [`rebase_rescue_core::runner::RepoRecoveryRunner`].
//!
//! # Examples
//!
//! The CLI binary (`rebase-rescue`) is normally run without arguments:
//!
//! ```bash
//! # Abort the rebase in the default repository and show its status
//! rebase-rescue
//!
//! # Somewhere else, with a longer timeout
//! rebase-rescue --repository-path ~/src/project --timeout-secs 10
//!
//! # See what is being run
//! RUST_LOG=debug rebase-rescue
//! ```

use std::io::Write;

use log::debug;
use rebase_rescue_core::error::Result;
use rebase_rescue_core::runner::RepoRecoveryRunner;

use crate::cli_args::Args;

pub mod cli_args;

/// Runs the abort-then-status sequence described by `args`, reporting to `out`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the repository directory
/// is unusable, or `out` cannot be written to.
pub async fn execute<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = args.runner_config()?;
    debug!("Runner configuration: {:?}", config);

    RepoRecoveryRunner::new(config).run(out).await
}
