use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::process::Command;

use crate::environment::Environment;

/// A single external command, fully described before it is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_directory: PathBuf,
    /// Replaces the inherited environment entirely when set.
    pub environment: Option<Environment>,
    pub timeout: Duration,
}

impl Invocation {
    pub fn new<S: AsRef<str>>(
        program: &str,
        args: &[S],
        working_directory: PathBuf,
        timeout: Duration,
    ) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.as_ref().to_string()).collect(),
            working_directory,
            environment: None,
            timeout,
        }
    }

    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What a command that ran to completion left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// How an invocation ended, from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// The command exited, with any exit code.
    Completed(ProcessResult),
    /// The command was still running when the timeout elapsed. It has been killed.
    TimedOut { timeout: Duration },
    /// The command could not be started at all.
    LaunchFailed { message: String },
}

/// Launches invocations. The runner only ever talks to git through this.
#[async_trait]
pub trait Invoker {
    async fn invoke(&self, invocation: &Invocation) -> InvocationOutcome;
}

/// Runs invocations as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessInvoker;

#[async_trait]
impl Invoker for ProcessInvoker {
    async fn invoke(&self, invocation: &Invocation) -> InvocationOutcome {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .current_dir(&invocation.working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(environment) = &invocation.environment {
            command.env_clear().envs(environment);
        }

        debug!(
            "Running `{}` in `{}` with a {}s timeout",
            invocation,
            invocation.working_directory.display(),
            invocation.timeout.as_secs_f64()
        );

        match tokio::time::timeout(invocation.timeout, command.output()).await {
            Ok(Ok(output)) => {
                let result = ProcessResult {
                    code: exit_code(output.status),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                };
                debug!("`{}` exited with {}", invocation, result.code);
                InvocationOutcome::Completed(result)
            }
            Ok(Err(e)) => {
                warn!("Could not launch `{}`: {}", invocation, e);
                InvocationOutcome::LaunchFailed {
                    message: e.to_string(),
                }
            }
            // The child is dropped, and so killed, along with the `output` future.
            Err(_) => {
                warn!(
                    "`{}` did not finish within {}s, killed it",
                    invocation,
                    invocation.timeout.as_secs_f64()
                );
                InvocationOutcome::TimedOut {
                    timeout: invocation.timeout,
                }
            }
        }
    }
}

/// The exit code of a finished process. A process killed by signal N reports -N.
#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
