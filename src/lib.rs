#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Gitout - Thin Git Porcelain Adapter
//!
//! Gitout wraps a handful of git porcelain operations (listing remotes,
//! fetching, pulling, pushing, resolving the upstream tracking branch) by
//! shelling out to the external `git` executable and parsing its text output.
//!
//! Nothing beneath the git binary is reimplemented: transport, merging,
//! object storage and conflict resolution all belong to git. This crate only
//! builds argument lists, spawns the process, and shapes stdout into simple
//! Rust values.
//!
//! ## Architecture
//!
//! - [`GitContext`]: explicit handle on a working repository and a resolved
//!   git binary. Every operation takes the context; no ambient working
//!   directory is consulted.
//! - [`remotes`]: the porcelain operations themselves, each a single
//!   stateless request/response cycle against the git binary.
//! - [`exec`]: process spawning and output capture, including the one case
//!   (upstream resolution) where git's error channel is deliberately
//!   swallowed.
//! - [`config`]: TOML configuration for binary location and CLI defaults.
//!
//! ## Example Usage
//!
//! ```no_run
//! use gitout::GitContext;
//! use gitout::remotes::FetchOptions;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = GitContext::new(".".into())?;
//!
//! for (name, url) in ctx.list_remotes()?.iter() {
//!     println!("{name} -> {url}");
//! }
//!
//! ctx.fetch(&FetchOptions::default())?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Configuration parsing and management.
pub mod config;

/// Git error taxonomy for failed invocations and malformed output.
pub mod errors;

/// Process invocation layer for the external git binary.
pub mod exec;

/// Output formatting and styling for the CLI.
pub mod output;

/// Remote porcelain operations (list, fetch, pull, push, upstream).
pub mod remotes;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the gitout binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file path relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/gitout/config.toml";

/// Central context for all gitout operations.
///
/// Holds the working repository directory and the resolved path of the git
/// binary. The repository path is explicit rather than inherited from the
/// process working directory, so a single process can address several
/// repositories without chdir games.
///
/// Each operation spawns one git process, blocks until it exits, and holds
/// no state across calls.
#[derive(Debug, Clone)]
pub struct GitContext {
    /// Directory of the working repository git is invoked in.
    pub repo_dir: PathBuf,

    /// Resolved path to the git executable.
    pub git_binary: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl GitContext {
    /// Creates a context for `repo_dir`, loading configuration from the
    /// default path and resolving the git binary.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be read or created, or
    /// if no git executable can be located.
    pub fn new(repo_dir: PathBuf) -> Result<Self> {
        let config_path = config::Config::default_path()?;
        let config = config::Config::load(&config_path)?;
        Self::with_config(repo_dir, config)
    }

    /// Creates a context from an already loaded configuration.
    ///
    /// # Errors
    /// Returns an error if no git executable can be located.
    pub fn with_config(repo_dir: PathBuf, config: config::Config) -> Result<Self> {
        let git_binary = match &config.git.binary {
            Some(path) => path.clone(),
            None => which::which("git")
                .context("Could not find a 'git' executable on PATH. Is git installed?")?,
        };

        Ok(Self {
            repo_dir,
            git_binary,
            config,
        })
    }
}
