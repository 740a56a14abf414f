//! Revision resolution from local git history.
//!
//! The deployment payload carries a human version label (the latest tag by
//! version ordering) and the revision that tag points at. Both come from
//! git; the selection happens here so the command output format stays in
//! one place.

use crate::error::{Error, Result};
use crate::utils::command;

/// Executes an external command and returns its trimmed stdout.
///
/// The production implementation runs a real subprocess and suspends the
/// caller until it exits. Tests substitute a stub with scripted outputs.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Runs commands in a configured repository directory.
pub struct ShellRunner {
    repo_dir: String,
}

impl ShellRunner {
    pub fn new(repo_dir: impl Into<String>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(".")
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let context = format!("{} {}", program, args.join(" "));
        command::run_in(&self.repo_dir, program, args, &context)
            .map_err(|e| Error::git_command_failed(e.to_string()))
    }
}

/// Get the latest version tag: last line of `git tag --sort=version:refname`.
///
/// Whitespace-only output (no tags) is an error; anything non-blank is
/// accepted as-is, with no format validation.
pub fn resolve_version(runner: &dyn CommandRunner) -> Result<String> {
    let stdout = runner.run("git", &["tag", "--sort=version:refname"])?;
    last_line(&stdout).ok_or_else(|| Error::git_no_output("git tag --sort=version:refname"))
}

/// Get the revision a version tag points at: first line of `git rev-list <version>`.
///
/// Runs only after version resolution, since the tag is its argument.
pub fn resolve_revision(runner: &dyn CommandRunner, version: &str) -> Result<String> {
    let stdout = runner.run("git", &["rev-list", version])?;
    first_line(&stdout).ok_or_else(|| Error::git_no_output(format!("git rev-list {}", version)))
}

fn first_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
}

fn last_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .map(String::from)
}
