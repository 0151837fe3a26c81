//! Command-line argument parsing.
//!
//! Every flag is optional: with none given, the tool aborts the rebase in
//! the default repository with the default five second timeout.

use clap::Parser;
use rebase_rescue_core::config::RunnerConfig;
use rebase_rescue_core::error::Result;

/// Command-line arguments for the `rebase-rescue` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rebase_rescue_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rebase-rescue", "--repository-path", "/srv/repo"]);
/// assert_eq!(args.repository_path, Some("/srv/repo".to_string()));
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)]
pub struct Args {
    /// Repository to abort the rebase in.
    ///
    /// If not provided, defaults to the built-in repository path. `~` is expanded.
    #[arg(long, short = 'r')]
    pub repository_path: Option<String>,

    /// Seconds to wait for each git invocation before giving up on it.
    ///
    /// If not provided, defaults to 5.
    #[arg(long, short = 't', value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Program to run as git.
    ///
    /// If not provided, `git` is looked up on `PATH`.
    #[arg(long, short = 'g')]
    pub git_program: Option<String>,
}

impl Args {
    /// Turns the parsed flags into a runner configuration, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero.
    pub fn runner_config(&self) -> Result<RunnerConfig> {
        RunnerConfig::from_overrides(&self.repository_path, self.timeout_secs, &self.git_program)
    }
}
