//! Rebase Rescue Core Library
//!
//! This crate provides the core functionality for rebase-rescue, a small tool
//! that gets a repository out of a stuck rebase: it runs `git rebase --abort`
//! without ever letting git open an editor, then prints `git status`.
//!
//! # Key Features
//!
//! - **Editor Suppression**: `GIT_EDITOR` and `EDITOR` point at a no-op command for the abort
//! - **Bounded Waits**: every git invocation is abandoned after a timeout
//! - **Contained Failures**: a failed, timed-out or missing git never stops the status report
//! - **Explicit Working Directory**: the repository is passed to each invocation, never `chdir`ed into
//!
//! # Examples
//!
//! ```no_run
//! use rebase_rescue_core::config::RunnerConfig;
//! use rebase_rescue_core::runner::RepoRecoveryRunner;
//!
//! # async fn example() -> rebase_rescue_core::error::Result<()> {
//! let runner = RepoRecoveryRunner::new(RunnerConfig::default());
//! runner.run(&mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod execution;
pub mod runner;
