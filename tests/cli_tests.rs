//! Smoke tests of the gitout binary.
//!
//! The config path is always pointed into the tempdir so tests never read
//! or create the user's real configuration file.

use anyhow::{Context, Result};
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Run a raw git command in `dir`, failing the test on nonzero exit.
fn git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .context("failed to spawn git")?;

    if !output.status.success() {
        return Err(anyhow::anyhow!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    Ok(())
}

/// Initialize a working repository with one commit on `main`.
fn setup_repo(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    git(dir, &["init"])?;
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(dir, &["config", "user.email", "test@gitout.invalid"])?;
    git(dir, &["config", "user.name", "Gitout Tests"])?;
    git(dir, &["config", "commit.gpgsign", "false"])?;

    fs::write(dir.join("README"), "hello\n")?;
    git(dir, &["add", "README"])?;
    git(dir, &["commit", "-m", "initial commit"])?;

    Ok(())
}

/// Binary under test with config redirected into the tempdir.
fn gitout(temp: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("gitout")?;
    cmd.env(
        "GITOUT_CONFIG_PATH",
        temp.path().join("gitout-config.toml"),
    );
    Ok(cmd)
}

#[test]
fn test_help_lists_subcommands() -> Result<()> {
    let temp = TempDir::new()?;
    gitout(&temp)?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("remotes"))
        .stdout(predicate::str::contains("upstream"));
    Ok(())
}

#[test]
fn test_remotes_prints_name_url_pairs() -> Result<()> {
    let temp = TempDir::new()?;
    let work = temp.path().join("work");
    setup_repo(&work)?;
    git(&work, &["remote", "add", "origin", "https://x.test/repo.git"])?;

    gitout(&temp)?
        .args(["-C", &work.display().to_string(), "remotes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("origin\thttps://x.test/repo.git"));
    Ok(())
}

#[test]
fn test_upstream_without_tracking_succeeds_quietly() -> Result<()> {
    let temp = TempDir::new()?;
    let work = temp.path().join("work");
    setup_repo(&work)?;

    gitout(&temp)?
        .args(["-C", &work.display().to_string(), "--quiet", "upstream"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_branches_empty_without_remotes() -> Result<()> {
    let temp = TempDir::new()?;
    let work = temp.path().join("work");
    setup_repo(&work)?;

    gitout(&temp)?
        .args(["-C", &work.display().to_string(), "branches"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_fetch_prune_flags_conflict() -> Result<()> {
    let temp = TempDir::new()?;
    gitout(&temp)?
        .args(["fetch", "--prune", "--no-prune"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_fetch_outside_repository_fails() -> Result<()> {
    let temp = TempDir::new()?;
    let not_a_repo = temp.path().join("empty");
    fs::create_dir_all(&not_a_repo)?;

    gitout(&temp)?
        .args(["-C", &not_a_repo.display().to_string(), "fetch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}
