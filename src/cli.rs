//! Command-line interface definitions for gitout.
//!
//! All CLI argument parsing structures using clap's derive macros.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for gitout.
#[derive(Parser)]
#[command(
    name = "gitout",
    version = crate::VERSION,
    about = "Thin shell-out adapter over the git CLI",
    long_about = "Exposes git remote porcelain (remotes, fetch, pull, push, upstream) by shelling out to the git executable"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Run as if started in this repository directory
    #[arg(short = 'C', long = "repo", global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List configured remotes with their URLs
    Remotes,

    /// Download objects and refs from a remote (all remotes by default)
    Fetch {
        /// Remote to fetch from (default: all remotes)
        remote: Option<String>,

        /// Prune deleted remote-tracking branches (config default: on)
        #[arg(long, conflicts_with = "no_prune")]
        prune: bool,

        /// Do not prune deleted remote-tracking branches
        #[arg(long)]
        no_prune: bool,
    },

    /// List remote-tracking branches
    Branches,

    /// Fetch from and integrate with a remote
    Pull {
        /// Remote to pull from
        remote: Option<String>,

        /// Branch to pull (only used together with a remote)
        branch: Option<String>,
    },

    /// Update remote refs along with associated objects
    Push {
        /// Remote to push to
        remote: Option<String>,

        /// Branch to push
        branch: Option<String>,

        /// Push this local branch to the given branch (local:branch refspec)
        #[arg(long)]
        local_branch: Option<String>,

        #[arg(short, long)]
        force: bool,

        /// Set the upstream tracking branch
        #[arg(short = 'u', long)]
        set_upstream: bool,
    },

    /// Print the upstream tracking branch of the current branch
    Upstream,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
