//! Remote porcelain operations.
//!
//! Each operation builds an argument list, invokes git once through the
//! [`exec`](crate::exec) layer, and shapes stdout into a simple value. No
//! state survives between calls.

use crate::GitContext;
use crate::errors::GitError;
use anyhow::Result;

/// Insertion-ordered mapping from remote name to URL.
///
/// Order matches the order `git remote -v` reports. Git prints two lines per
/// remote (fetch and push); duplicates collapse to the last-seen URL since
/// the mapping is keyed by name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Remotes(Vec<(String, String)>);

impl Remotes {
    /// Inserts a remote, replacing the URL if the name is already present.
    fn insert(&mut self, name: String, url: String) {
        if let Some((_, existing)) = self.0.iter_mut().find(|(n, _)| *n == name) {
            *existing = url;
        } else {
            self.0.push((name, url));
        }
    }

    /// Looks up the URL for a remote name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, url)| url.as_str())
    }

    /// Iterates over `(name, url)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, u)| (n.as_str(), u.as_str()))
    }

    /// Number of distinct remotes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no remotes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Options for [`GitContext::fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Remote to fetch from. When absent, all configured remotes are
    /// fetched (`--all`).
    pub remote: Option<String>,
    /// Remove remote-tracking refs whose remote branch is gone (`--prune`).
    pub prune: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            remote: None,
            prune: true,
        }
    }
}

/// Options for [`GitContext::pull`].
///
/// `branch` is only meaningful combined with `remote`, mirroring
/// `git pull [<remote> [<branch>]]`; without a remote it is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullOptions {
    /// Remote to pull from.
    pub remote: Option<String>,
    /// Branch to pull.
    pub branch: Option<String>,
}

/// Options for [`GitContext::push`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushOptions {
    /// Remote to push to.
    pub remote: Option<String>,
    /// Branch to push.
    pub branch: Option<String>,
    /// Distinct local branch name. When set together with `branch`, the
    /// refspec `local_branch:branch` is pushed instead of plain `branch`.
    pub local_branch: Option<String>,
    /// Pass `--force`.
    pub force: bool,
    /// Pass `--set-upstream`.
    pub set_upstream: bool,
}

impl GitContext {
    /// Lists configured remotes as an ordered name→URL mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if git fails, or [`GitError::Parse`] if any output
    /// line does not match the `<name>\t<url> <tag>` shape. Malformed lines
    /// abort the whole call rather than being dropped silently.
    pub fn list_remotes(&self) -> Result<Remotes> {
        let output = self.git(&["remote", "-v"])?;
        parse_remotes(&output.stdout)
    }

    /// Fetches refs from one remote, or from all remotes when none is named.
    ///
    /// # Errors
    ///
    /// Returns an error if the git fetch command fails.
    pub fn fetch(&self, options: &FetchOptions) -> Result<()> {
        let argv = fetch_args(options);
        self.git(&borrow_args(&argv))?;
        Ok(())
    }

    /// Lists known remote-tracking branches, e.g. `origin/main`.
    ///
    /// # Errors
    ///
    /// Returns an error if the git branch command fails.
    pub fn remote_branches(&self) -> Result<Vec<String>> {
        let output = self.git(&["branch", "-r", "--no-color"])?;
        Ok(parse_branch_list(&output.stdout))
    }

    /// Pulls from the given remote and branch, or performs a default
    /// `git pull` when none are given. Merge/rebase behavior is whatever
    /// the repository's git configuration says.
    ///
    /// # Errors
    ///
    /// Returns an error if the git pull command fails.
    pub fn pull(&self, options: &PullOptions) -> Result<()> {
        let argv = pull_args(options);
        self.git(&borrow_args(&argv))?;
        Ok(())
    }

    /// Pushes to the given remote and branch, returning git's own status
    /// output since it often carries user-relevant detail (new branch
    /// creation, rejection hints).
    ///
    /// Git writes push summaries to stderr even on success, so stderr text
    /// is returned when stdout is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the git push command fails.
    pub fn push(&self, options: &PushOptions) -> Result<String> {
        let argv = push_args(options);
        let output = self.git(&borrow_args(&argv))?;

        if output.stdout.trim().is_empty() {
            Ok(output.stderr)
        } else {
            Ok(output.stdout)
        }
    }

    /// Resolves the upstream tracking branch of the current branch, e.g.
    /// `origin/main`.
    ///
    /// Returns `None` when no upstream is configured. Git reports that case
    /// as a rev-parse error, which is an expected answer here and is
    /// deliberately swallowed rather than propagated.
    ///
    /// # Errors
    ///
    /// Returns an error only if the git binary cannot be spawned.
    pub fn upstream(&self) -> Result<Option<String>> {
        let stdout =
            self.git_suppressed(&["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"])?;

        Ok(stdout
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }
}

/// Builds the argument list for fetch.
fn fetch_args(options: &FetchOptions) -> Vec<String> {
    let mut args = vec!["fetch".to_string()];

    if options.prune {
        args.push("--prune".to_string());
    }

    match &options.remote {
        Some(remote) => args.push(remote.clone()),
        None => args.push("--all".to_string()),
    }

    args
}

/// Builds the argument list for pull.
fn pull_args(options: &PullOptions) -> Vec<String> {
    let mut args = vec!["pull".to_string()];

    if let Some(remote) = &options.remote {
        args.push(remote.clone());
        if let Some(branch) = &options.branch {
            args.push(branch.clone());
        }
    }

    args
}

/// Builds the argument list for push: flags, remote, then the branch or
/// `local:branch` refspec.
fn push_args(options: &PushOptions) -> Vec<String> {
    let mut args = vec!["push".to_string()];

    if options.force {
        args.push("--force".to_string());
    }
    if options.set_upstream {
        args.push("--set-upstream".to_string());
    }
    if let Some(remote) = &options.remote {
        args.push(remote.clone());
    }
    if let Some(branch) = &options.branch {
        match &options.local_branch {
            Some(local) => args.push(format!("{local}:{branch}")),
            None => args.push(branch.clone()),
        }
    }

    args
}

/// Reborrows an owned argument list for the exec layer.
fn borrow_args(argv: &[String]) -> Vec<&str> {
    argv.iter().map(String::as_str).collect()
}

/// Parses `git remote -v` output into an ordered mapping.
///
/// Each line is `<name>\t<url> (fetch|push)` with a name of
/// `[0-9a-zA-Z_-]+` and a URL containing no spaces. Anything after the
/// first space following the URL is ignored; a line without that two-token
/// prefix is a hard parse error.
fn parse_remotes(stdout: &str) -> Result<Remotes> {
    let mut remotes = Remotes::default();

    for line in stdout.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let (name, rest) = line
            .split_once('\t')
            .ok_or_else(|| remote_parse_error(line))?;

        if name.is_empty() || !name.chars().all(is_remote_name_char) {
            return Err(remote_parse_error(line));
        }

        let url = rest.split(' ').next().unwrap_or_default();
        if url.is_empty() {
            return Err(remote_parse_error(line));
        }

        remotes.insert(name.to_string(), url.to_string());
    }

    Ok(remotes)
}

/// Characters permitted in a remote name.
const fn is_remote_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Parse error for a malformed `remote -v` line.
fn remote_parse_error(line: &str) -> anyhow::Error {
    anyhow::Error::new(GitError::Parse {
        command: "git remote -v".to_string(),
        line: line.to_string(),
    })
}

/// Splits `git branch -r` output into trimmed, non-empty lines.
fn parse_branch_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
