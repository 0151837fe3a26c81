//! The abort-then-status sequence.
//!
//! The runner checks that the repository directory exists, asks git to abort
//! any rebase with every editor variable pointed at a no-op command, and then
//! prints `git status`. Whatever happens to the abort (non-zero exit, timeout,
//! git missing) is printed and the status step still runs. Only a bad
//! repository directory stops the run early.

use std::io::Write;
use std::path::Path;

use log::debug;

use crate::config::RunnerConfig;
use crate::environment::{editor_override_from_process, Environment};
use crate::error::{Error, Result};
use crate::execution::{Invocation, InvocationOutcome, Invoker, ProcessInvoker};

const ABORT_ARGS: [&str; 2] = ["rebase", "--abort"];
const STATUS_ARGS: [&str; 1] = ["status"];

pub struct RepoRecoveryRunner<I = ProcessInvoker> {
    config: RunnerConfig,
    invoker: I,
}

impl RepoRecoveryRunner<ProcessInvoker> {
    /// A runner that launches real git processes.
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_invoker(config, ProcessInvoker)
    }
}

impl<I: Invoker + Sync> RepoRecoveryRunner<I> {
    pub fn with_invoker(config: RunnerConfig, invoker: I) -> Self {
        Self { config, invoker }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// `git rebase --abort`, run under `environment` instead of the inherited one.
    pub fn abort_invocation(&self, environment: Environment) -> Invocation {
        Invocation::new(
            &self.config.git_program,
            &ABORT_ARGS,
            self.config.working_directory.clone(),
            self.config.timeout,
        )
        .with_environment(environment)
    }

    /// `git status`, run under the inherited environment.
    pub fn status_invocation(&self) -> Invocation {
        Invocation::new(
            &self.config.git_program,
            &STATUS_ARGS,
            self.config.working_directory.clone(),
            self.config.timeout,
        )
    }

    /// Runs the whole sequence, writing the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository directory is unusable, in which case
    /// nothing is launched and nothing is written, or if writing to `out` fails.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        validate_working_directory(&self.config.working_directory)?;

        self.abort_rebase(out, editor_override_from_process()).await?;
        self.report_status(out).await?;

        out.flush()?;
        Ok(())
    }

    /// Attempts the abort and prints what came of it. Never fails on git's account.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails.
    pub async fn abort_rebase<W: Write>(&self, out: &mut W, environment: Environment) -> Result<()> {
        writeln!(out, "Attempting to abort rebase...")?;

        let invocation = self.abort_invocation(environment);
        match self.invoker.invoke(&invocation).await {
            InvocationOutcome::Completed(result) => {
                writeln!(out, "Abort result: {}", result.code)?;
                if !result.stdout.is_empty() {
                    writeln!(out, "stdout: {}", result.stdout)?;
                }
                if !result.stderr.is_empty() {
                    writeln!(out, "stderr: {}", result.stderr)?;
                }
            }
            InvocationOutcome::TimedOut { .. } => {
                writeln!(out, "Timeout on rebase abort")?;
            }
            InvocationOutcome::LaunchFailed { message } => {
                writeln!(out, "Error: {message}")?;
            }
        }

        Ok(())
    }

    /// Prints `git status` output, or why there is none.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails.
    pub async fn report_status<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\nGit status:")?;

        let invocation = self.status_invocation();
        match self.invoker.invoke(&invocation).await {
            InvocationOutcome::Completed(result) => {
                writeln!(out, "{}", result.stdout)?;
                if !result.stderr.is_empty() {
                    writeln!(out, "stderr: {}", result.stderr)?;
                }
            }
            InvocationOutcome::TimedOut { timeout } => {
                writeln!(
                    out,
                    "Error checking status: `{}` timed out after {} seconds",
                    invocation,
                    timeout.as_secs_f64()
                )?;
            }
            InvocationOutcome::LaunchFailed { message } => {
                writeln!(out, "Error checking status: {message}")?;
            }
        }

        Ok(())
    }
}

/// Fails unless `path` exists and is a directory.
///
/// # Errors
///
/// Returns [`Error::Directory`] if the path cannot be inspected and
/// [`Error::NotADirectory`] if it is something other than a directory.
pub fn validate_working_directory(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| Error::directory_error(path.display().to_string(), e))?;

    if !metadata.is_dir() {
        return Err(Error::not_a_directory(path.display().to_string()));
    }

    debug!("Using repository directory `{}`", path.display());
    Ok(())
}
