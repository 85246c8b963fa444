//! Synchronous invocation of the external git binary.
//!
//! Each call spawns one process with stdin closed, blocks the caller until
//! it exits, and captures both output streams. There is no retry, timeout or
//! cancellation: a hung git process hangs the caller, and overlapping
//! invocations are left to git's own repository locking.

use crate::GitContext;
use crate::errors::GitError;
use anyhow::Result;
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// How a nonzero exit or diagnostic output from git is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StderrMode {
    /// Nonzero exit is a failure; stderr text is carried in the error.
    Propagate,
    /// Nonzero exit is an expected empty answer, not a failure. Used only
    /// for upstream resolution, where "no upstream configured" arrives as a
    /// rev-parse error.
    Suppress,
}

/// Captured output of a successful git invocation.
///
/// Both streams are kept because some porcelain commands (push in
/// particular) report user-relevant status on stderr while exiting zero.
#[derive(Debug)]
pub struct GitOutput {
    /// Captured stdout, lossily decoded.
    pub stdout: String,
    /// Captured stderr, lossily decoded.
    pub stderr: String,
}

impl GitContext {
    /// Runs git with `args`, failing on nonzero exit.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Spawn`] if the binary cannot be executed and
    /// [`GitError::CommandFailed`] on nonzero exit.
    pub fn git(&self, args: &[&str]) -> Result<GitOutput> {
        match self.run(args, StderrMode::Propagate)? {
            Some(output) => Ok(output),
            // Propagate mode never swallows a failure
            None => Err(anyhow::Error::new(GitError::CommandFailed {
                command: command_label(args),
                stderr: String::new(),
            })),
        }
    }

    /// Runs git with `args`, treating nonzero exit as an empty answer.
    ///
    /// # Errors
    ///
    /// Returns an error only if the binary cannot be spawned at all.
    pub fn git_suppressed(&self, args: &[&str]) -> Result<Option<String>> {
        Ok(self
            .run(args, StderrMode::Suppress)?
            .map(|output| output.stdout))
    }

    /// Shared invocation path for both stderr modes.
    fn run(&self, args: &[&str], mode: StderrMode) -> Result<Option<GitOutput>> {
        let output = self.spawn(args)?;

        if !output.status.success() {
            match mode {
                StderrMode::Propagate => {
                    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                    return Err(anyhow::Error::new(GitError::CommandFailed {
                        command: command_label(args),
                        stderr,
                    }));
                }
                StderrMode::Suppress => {
                    debug!(
                        command = %command_label(args),
                        status = %output.status,
                        "git exited nonzero, suppressed"
                    );
                    return Ok(None);
                }
            }
        }

        Ok(Some(GitOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }))
    }

    /// Spawns the git process and waits for it to exit.
    fn spawn(&self, args: &[&str]) -> Result<Output> {
        debug!(
            git = %self.git_binary.display(),
            repo = %self.repo_dir.display(),
            ?args,
            "spawning git"
        );

        Command::new(&self.git_binary)
            .args(args)
            .current_dir(&self.repo_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                anyhow::Error::new(GitError::Spawn(format!(
                    "{}: {e}",
                    self.git_binary.display()
                )))
            })
    }
}

/// Short label for error messages, e.g. "git fetch".
fn command_label(args: &[&str]) -> String {
    match args.first() {
        Some(subcommand) => format!("git {subcommand}"),
        None => "git".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_label() {
        assert_eq!(command_label(&["fetch", "--all"]), "git fetch");
        assert_eq!(command_label(&[]), "git");
    }
}
