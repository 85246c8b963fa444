use std::fmt;

/// Errors raised when invoking git or interpreting its output.
#[derive(Debug)]
pub enum GitError {
    /// The git binary could not be spawned at all.
    Spawn(String),
    /// Git exited nonzero where failure is not an expected outcome.
    CommandFailed {
        /// The git subcommand that was run (e.g. "git fetch").
        command: String,
        /// Captured stderr text from the failed process.
        stderr: String,
    },
    /// A line of git output did not match the expected textual shape.
    Parse {
        /// The git subcommand whose output was being parsed.
        command: String,
        /// The offending output line.
        line: String,
    },
}

impl GitError {
    /// Condense a stderr blob to its first few meaningful lines.
    fn summarize(stderr: &str) -> String {
        let lines: Vec<&str> = stderr
            .lines()
            .filter(|l| !l.trim().is_empty())
            .take(3)
            .collect();

        if lines.is_empty() {
            return "no error details available".to_string();
        }

        lines.join(" | ")
    }
}

impl fmt::Display for GitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(msg) => write!(f, "failed to run git: {msg}"),
            Self::CommandFailed { command, stderr } => {
                write!(f, "{command} failed: {}", Self::summarize(stderr))
            }
            Self::Parse { command, line } => {
                write!(f, "unexpected {command} output line: {line:?}")
            }
        }
    }
}

impl std::error::Error for GitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_takes_leading_stderr_lines() {
        let err = GitError::CommandFailed {
            command: "git push".to_string(),
            stderr: "error: failed to push some refs\n\nhint: Updates were rejected\nhint: more\nhint: even more\n".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("git push failed:"));
        assert!(msg.contains("failed to push some refs"));
        assert!(msg.contains("Updates were rejected"));
        // Only the first three non-empty lines survive
        assert!(!msg.contains("even more"));
    }

    #[test]
    fn test_command_failed_with_empty_stderr() {
        let err = GitError::CommandFailed {
            command: "git fetch".to_string(),
            stderr: String::new(),
        };
        assert!(err.to_string().contains("no error details available"));
    }

    #[test]
    fn test_parse_error_quotes_line() {
        let err = GitError::Parse {
            command: "git remote -v".to_string(),
            line: "garbage without a tab".to_string(),
        };
        assert!(err.to_string().contains("\"garbage without a tab\""));
    }
}
