use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use gitout::cli::{Cli, Commands};
use gitout::remotes::{FetchOptions, PullOptions, PushOptions};
use gitout::{GitContext, output};
use std::io;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if cli.quiet {
        output::set_verbosity(output::Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(output::Verbosity::Verbose);
    }

    // Completion needs no repository or git binary
    if let Commands::Completion { shell } = &cli.command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "gitout", &mut io::stdout());
        return Ok(());
    }

    let ctx = GitContext::new(cli.repo)?;

    match cli.command {
        Commands::Remotes => {
            let remotes = ctx.list_remotes()?;
            if remotes.is_empty() {
                output::info("No remotes configured");
            }
            for (name, url) in remotes.iter() {
                println!("{name}\t{url}");
            }
        }
        Commands::Fetch {
            remote,
            prune,
            no_prune,
        } => {
            let prune = if no_prune {
                false
            } else {
                prune || ctx.config.fetch.prune
            };
            let options = FetchOptions {
                remote: remote.clone(),
                prune,
            };
            ctx.fetch(&options)?;
            match remote {
                Some(name) => output::success(&format!("Fetched from {name}")),
                None => output::success("Fetched from all remotes"),
            }
        }
        Commands::Branches => {
            for branch in ctx.remote_branches()? {
                println!("{branch}");
            }
        }
        Commands::Pull { remote, branch } => {
            ctx.pull(&PullOptions { remote, branch })?;
            output::success("Pull complete");
        }
        Commands::Push {
            remote,
            branch,
            local_branch,
            force,
            set_upstream,
        } => {
            let report = ctx.push(&PushOptions {
                remote,
                branch,
                local_branch,
                force,
                set_upstream,
            })?;
            let report = report.trim();
            if !report.is_empty() {
                println!("{report}");
            }
        }
        Commands::Upstream => match ctx.upstream()? {
            Some(branch) => println!("{branch}"),
            None => output::info("No upstream configured for the current branch"),
        },
        Commands::Completion { .. } => unreachable!("handled above"),
    }

    Ok(())
}
