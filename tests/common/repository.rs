//! Git repository management and setup utilities
//!
//! Provides functions for creating temporary repositories in known states and for
//! running the git-powerline binary against them with an isolated configuration.

#![allow(dead_code)]

use assert_cmd::Command;
use git_powerline::core::error::{PowerlineError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Runs a git command in `dir`, failing on a non-zero exit
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(PowerlineError::Io)?;

    if !output.status.success() {
        return Err(PowerlineError::git_command_failed(
            args,
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn configure_identity(dir: &Path) -> Result<()> {
    git(dir, &["config", "user.name", "Test User"])?;
    git(dir, &["config", "user.email", "test@example.com"])?;
    git(dir, &["config", "commit.gpgsign", "false"])?;
    Ok(())
}

/// Sets up a fresh git repository on branch `main` with no commits
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(PowerlineError::Io)?;
    let repo_path = temp_dir.path().join("repo");
    fs::create_dir_all(&repo_path).map_err(PowerlineError::Io)?;

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    configure_identity(&repo_path)?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with one commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Clones `origin` next to it and returns the path of the clone
pub fn clone_repo(origin: &TestRepo) -> Result<PathBuf> {
    let clone_path = origin.temp_dir.path().join("clone");
    let origin_path = origin.path.to_string_lossy().into_owned();
    let clone_arg = clone_path.to_string_lossy().into_owned();
    git(origin.temp_dir.path(), &["clone", &origin_path, &clone_arg])?;
    configure_identity(&clone_path)?;
    Ok(clone_path)
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content).map_err(PowerlineError::Io)?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])?;
    Ok(())
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

pub fn git_stash(repo_path: &Path) -> Result<()> {
    git(repo_path, &["stash"])?;
    Ok(())
}

/// The git-powerline binary with its config isolated in `config_home`
pub fn powerline_cmd(dir: &Path, config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-powerline").expect("binary is built");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG");
    cmd
}
