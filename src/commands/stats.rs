use crate::core::{
    config::Config,
    error::{PowerlineError, Result},
    git::GitCli,
    git_segment::{collect_snapshot, RepoSnapshot},
    output::print_json,
};
use std::env;

/// Print the repository snapshot of the current directory as JSON
pub fn execute_stats(config: &Config) -> Result<()> {
    let snapshot = current_snapshot(config)?;
    print_json(&snapshot)
}

/// Snapshot of the repository enclosing the current directory.
///
/// Unlike the prompt this reports failures, and it ignores the ignore list.
pub fn current_snapshot(config: &Config) -> Result<RepoSnapshot> {
    let current_dir = env::current_dir()?;
    let backend = GitCli::open(&current_dir)?;

    let config = Config {
        ignore_repos: Vec::new(),
        ..config.clone()
    };
    collect_snapshot(&backend, &config)?.ok_or(PowerlineError::NotInGitRepo)
}
