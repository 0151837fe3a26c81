//! Runner configuration and its defaults.
//!
//! There is no configuration file: every value has a built-in default that
//! the command line may override.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Repository the runner operates on when no path is given.
pub const DEFAULT_REPOSITORY_PATH: &str = "/home/blackghost/Documents/BOXMEOUT_STELLA/BOXMEOUT_STELLA";

/// Upper bound on how long each git invocation is waited for.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Program used for both git invocations.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Resolves the repository path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// repository path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rebase_rescue_core::config::get_repository_path;
///
/// let custom_path = get_repository_path(&Some("/srv/repo".to_string()));
/// assert_eq!(custom_path, "/srv/repo");
/// ```
pub fn get_repository_path(repository_path_arg: &Option<String>) -> String {
    let repository_path = match repository_path_arg {
        Some(repository_path) => repository_path,
        None => DEFAULT_REPOSITORY_PATH,
    };

    shellexpand::tilde(repository_path).to_string()
}

/// Resolves the per-invocation timeout.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeout`] for a zero timeout.
pub fn get_timeout(timeout_secs_arg: Option<u64>) -> Result<Duration> {
    let timeout_secs = timeout_secs_arg.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(Error::InvalidTimeout(timeout_secs));
    }

    Ok(Duration::from_secs(timeout_secs))
}

/// Everything the runner needs to know about where and how to call git.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub working_directory: PathBuf,
    pub git_program: String,
    pub timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            working_directory: PathBuf::from(DEFAULT_REPOSITORY_PATH),
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RunnerConfig {
    /// Builds a configuration from optional overrides, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout override is zero.
    pub fn from_overrides(
        repository_path: &Option<String>,
        timeout_secs: Option<u64>,
        git_program: &Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            working_directory: PathBuf::from(get_repository_path(repository_path)),
            git_program: git_program
                .clone()
                .unwrap_or_else(|| DEFAULT_GIT_PROGRAM.to_string()),
            timeout: get_timeout(timeout_secs)?,
        })
    }
}
