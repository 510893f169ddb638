//! External command execution.
//!
//! Every query against the hosting platform goes through [`CommandRunner`],
//! which makes it the single I/O boundary of the acquisition pipeline.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use std::fmt;
use tokio::process::Command;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command with the given arguments and return its standard output.
    ///
    /// A non-zero exit is reported as a [`CommandError`].
    async fn run(&self, args: &[String]) -> Result<String>;
}

/// An external command that ran but exited unsuccessfully.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandError {
    pub program: String,
    pub args: Vec<String>,
    /// Exit code, if the process was not killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(
                f,
                "`{} {}` exited with status {}",
                self.program,
                self.args.join(" "),
                code
            ),
            None => write!(
                f,
                "`{} {}` was terminated by a signal",
                self.program,
                self.args.join(" ")
            ),
        }
    }
}

impl std::error::Error for CommandError {}

/// Runs the GitHub CLI (or any compatible executable).
pub struct GhCommand {
    program: String,
}

impl GhCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GhCommand {
    fn default() -> Self {
        Self::new("gh")
    }
}

#[async_trait]
impl CommandRunner for GhCommand {
    #[tracing::instrument(skip(self))]
    async fn run(&self, args: &[String]) -> Result<String> {
        debug!("Running {} {:?}.", self.program, args);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .with_context(|| format!("Failed to spawn {}", self.program))?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            error!("Output: {}\nError: {}", stdout, stderr);
            return Err(CommandError {
                program: self.program.clone(),
                args: args.to_vec(),
                code: output.status.code(),
                stdout,
                stderr,
            }
            .into());
        }

        let stdout = String::from_utf8(output.stdout)
            .with_context(|| format!("Output of {} is not valid UTF-8", self.program))?;
        debug!("Output: {}", stdout);
        Ok(stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_run_returns_stdout() {
        let runner = GhCommand::new("sh");
        let out = runner.run(&args(&["-c", "printf 'a\\tb'"])).await.unwrap();
        assert_eq!(out, "a\tb");
    }

    #[tokio::test]
    async fn test_run_failure_carries_captured_streams() {
        let runner = GhCommand::new("sh");
        let err = runner
            .run(&args(&["-c", "echo out; echo err >&2; exit 3"]))
            .await
            .unwrap_err();

        let err = err.downcast_ref::<CommandError>().unwrap();
        assert_eq!(err.program, "sh");
        assert_eq!(err.code, Some(3));
        assert_eq!(err.stdout, "out\n");
        assert_eq!(err.stderr, "err\n");
        assert!(err.to_string().contains("exited with status 3"));
    }

    #[tokio::test]
    async fn test_run_missing_program() {
        let runner = GhCommand::new("definitely-not-a-real-program-xyz");
        let err = runner.run(&args(&["--version"])).await.unwrap_err();
        assert!(err.downcast_ref::<CommandError>().is_none());
        assert!(err.to_string().contains("Failed to spawn"));
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_utf8_output() {
        let runner = GhCommand::new("sh");
        let err = runner
            .run(&args(&["-c", "printf 'ok\\377'"]))
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<CommandError>().is_none());
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_default_program_is_gh() {
        assert_eq!(GhCommand::default().program, "gh");
    }
}
