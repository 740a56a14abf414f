//! CLI integration tests.
//!
//! `resolve` runs against real temporary git repositories; `report` is only
//! exercised up to its credential check so no test touches the network.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    #[allow(deprecated)]
    let cmd = Command::cargo_bin("raygun-deployment").expect("failed to find raygun-deployment binary");
    cmd
}

fn git(dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn rev_parse(dir: &Path, rev: &str) -> String {
    let output = std::process::Command::new("git")
        .args(["rev-parse", rev])
        .current_dir(dir)
        .output()
        .expect("failed to run git rev-parse");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn commit_file(dir: &Path, contents: &str, message: &str) {
    std::fs::write(dir.join("file.txt"), contents).unwrap();
    git(dir, &["add", "file.txt"]);
    git(dir, &["commit", "-q", "-m", message]);
}

/// Repository with tags v0.9.0 and v0.10.0 plus one untagged commit on top.
/// Version ordering must pick v0.10.0; byte ordering would pick v0.9.0.
fn repo_with_tags() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path();
    git(path, &["init", "-q"]);
    git(path, &["config", "user.email", "ci@example.com"]);
    git(path, &["config", "user.name", "ci"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    git(path, &["config", "tag.gpgsign", "false"]);

    commit_file(path, "one\n", "one");
    git(path, &["tag", "v0.9.0"]);
    commit_file(path, "two\n", "two");
    git(path, &["tag", "v0.10.0"]);
    commit_file(path, "three\n", "three");

    dir
}

#[test]
fn resolve_reports_the_latest_tag_and_its_revision() {
    let repo = repo_with_tags();

    let output = cmd()
        .args(["resolve", "--repo"])
        .arg(repo.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["version"], "v0.10.0");

    // The revision is the tagged commit, not the branch head.
    let tagged = rev_parse(repo.path(), "v0.10.0");
    let head = rev_parse(repo.path(), "HEAD");
    assert_eq!(envelope["data"]["scmIdentifier"], tagged.as_str());
    assert_ne!(tagged, head);
}

#[test]
fn resolve_fails_in_a_repository_without_tags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path();
    git(path, &["init", "-q"]);
    git(path, &["config", "user.email", "ci@example.com"]);
    git(path, &["config", "user.name", "ci"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    commit_file(path, "one\n", "one");

    cmd()
        .args(["resolve", "--repo"])
        .arg(path)
        .assert()
        .code(20)
        .stdout(predicate::str::contains("git.no_output"));
}

#[test]
fn resolve_fails_outside_a_repository() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .args(["resolve", "--repo"])
        .arg(dir.path())
        .assert()
        .code(20)
        .stdout(predicate::str::contains("git.command_failed"));
}

#[test]
fn report_without_credentials_fails_before_running_git() {
    // Not a git repository: a git error here would mean the credential
    // check did not short-circuit the pipeline.
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .args(["report", "--repo"])
        .arg(dir.path())
        .env_remove("RAYGUN_DEPLOY_TOKEN")
        .env_remove("RAYGUN_DEPLOY_KEY")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("env.missing_variable"))
        .stdout(predicate::str::contains("RAYGUN_DEPLOY_TOKEN"));
}

#[test]
fn report_names_the_second_variable_when_only_the_token_is_set() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .args(["report", "--repo"])
        .arg(dir.path())
        .env("RAYGUN_DEPLOY_TOKEN", "user")
        .env_remove("RAYGUN_DEPLOY_KEY")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("RAYGUN_DEPLOY_KEY"));
}
