//! Access to the repository the prompt is rendered in.
//!
//! [`GitBackend`] is the seam between the prompt logic and git itself: it hands out
//! raw text reports and never interprets them. [`GitCli`] is the real implementation;
//! tests swap in canned reports.
//!
//! # Key Features
//! - **Discovery**: `git2` finds the enclosing repository without spawning a process
//! - **Reports**: porcelain status and stash list come from the `git` executable
//! - **Detached HEAD**: short hash or unborn branch name for the branch segment

use crate::core::error::{PowerlineError, Result};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

const STATUS_ARGS: [&str; 4] = ["status", "--porcelain", "-b", "--ignore-submodules"];
const STASH_ARGS: [&str; 2] = ["stash", "list"];
const SHORT_HEAD_ARGS: [&str; 3] = ["rev-parse", "--short", "HEAD"];
const SYMBOLIC_HEAD_ARGS: [&str; 3] = ["symbolic-ref", "--short", "HEAD"];

/// Source of the raw git reports the prompt is built from
pub trait GitBackend {
    /// Top-level directory of the work tree
    fn toplevel(&self) -> Result<PathBuf>;

    /// Output of `git status --porcelain -b --ignore-submodules`
    fn status_porcelain(&self) -> Result<String>;

    /// Output of `git stash list`
    fn stash_list(&self) -> Result<String>;

    /// Abbreviated hash of HEAD; fails when there is no commit yet
    fn short_head(&self) -> Result<String>;

    /// Branch HEAD points to, even when it has no commit yet
    fn symbolic_head(&self) -> Result<String>;
}

/// [`GitBackend`] backed by git2 discovery and the `git` executable
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Discover the repository enclosing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).map_err(|e| {
            log::debug!("No repository at {}: {e}", path.as_ref().display());
            match e.code() {
                git2::ErrorCode::NotFound => PowerlineError::NotInGitRepo,
                _ => PowerlineError::GitRepo(e),
            }
        })?;
        let workdir = repo
            .workdir()
            .ok_or(PowerlineError::BareRepository)?
            .to_path_buf();
        log::debug!("Discovered work tree at {}", workdir.display());
        Ok(GitCli { workdir })
    }

    /// Run a git command in the work tree and return its stdout
    fn run_git(&self, args: &[&str]) -> Result<String> {
        log::debug!("Running git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| PowerlineError::git_spawn_failed(args, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PowerlineError::git_command_failed(args, stderr.trim()));
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

impl GitBackend for GitCli {
    fn toplevel(&self) -> Result<PathBuf> {
        // git2 reports the work tree with a trailing slash
        Ok(self.workdir.components().collect())
    }

    fn status_porcelain(&self) -> Result<String> {
        self.run_git(&STATUS_ARGS)
    }

    fn stash_list(&self) -> Result<String> {
        self.run_git(&STASH_ARGS)
    }

    fn short_head(&self) -> Result<String> {
        self.run_git(&SHORT_HEAD_ARGS)
    }

    fn symbolic_head(&self) -> Result<String> {
        self.run_git(&SYMBOLIC_HEAD_ARGS)
    }
}

/// Name shown for a HEAD that is not on a named, tracked branch.
///
/// A detached HEAD shows as `<detached symbol> <short hash>`. Without any commit the
/// unborn branch name is used, and `Error` when even that cannot be read.
pub fn detached_branch_name(backend: &dyn GitBackend, detached_symbol: &str) -> String {
    match backend.short_head() {
        Ok(out) => {
            let hash = out.lines().next().unwrap_or_default().trim();
            format!("{detached_symbol} {hash}")
        }
        Err(e) => {
            log::debug!("No commit at HEAD ({e}), trying symbolic ref");
            match backend.symbolic_head() {
                Ok(out) => out.lines().next().unwrap_or_default().trim().to_string(),
                Err(e) => {
                    log::debug!("Could not resolve HEAD: {e}");
                    "Error".to_string()
                }
            }
        }
    }
}
