//! Test data generation utilities and predefined scenarios
//!
//! Provides repositories in the states the prompt distinguishes: dirty, clean with
//! untracked files, stashed work and diverged from upstream.

#![allow(dead_code)]

use super::repository::*;
use git_powerline::core::error::Result;
use std::path::PathBuf;

/// One staged, one unstaged and one untracked file
pub fn create_mixed_changes_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_file(&repo.path, "tracked.txt", "tracked\n")?;
    git_add(&repo.path, "tracked.txt")?;
    git_commit(&repo.path, "Add tracked file")?;

    create_file(&repo.path, "initial.txt", "staged change\n")?;
    git_add(&repo.path, "initial.txt")?;
    create_file(&repo.path, "tracked.txt", "unstaged change\n")?;
    create_file(&repo.path, "new.txt", "untracked\n")?;

    Ok(repo)
}

/// Clean work tree with two stash entries
pub fn create_stashed_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_file(&repo.path, "initial.txt", "first stash\n")?;
    git_stash(&repo.path)?;
    create_file(&repo.path, "initial.txt", "second stash\n")?;
    git_stash(&repo.path)?;

    Ok(repo)
}

/// A clone that is one commit ahead of its upstream.
///
/// Returns the origin (which owns the temp dir) and the clone path.
pub fn create_ahead_clone() -> Result<(TestRepo, PathBuf)> {
    let origin = setup_test_repo_with_initial_commit()?;
    let clone = clone_repo(&origin)?;

    create_file(&clone, "local.txt", "local work\n")?;
    git_add(&clone, "local.txt")?;
    git_commit(&clone, "Local commit")?;

    Ok((origin, clone))
}
