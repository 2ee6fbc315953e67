//! The git prompt segment: from raw reports to appended segments.
//!
//! One call of [`segment_git`] runs, in order: the ignore-list check, the status
//! report, classification, the ahead/behind overlay, dirty/clean color choice, the
//! stash report, and finally the append of the `git-branch` and `git-status` groups.
//!
//! Any failing report aborts the whole segment before anything is appended, so the
//! prompt either shows the full git state or nothing at all.

use crate::core::branch_info::BranchInfo;
use crate::core::composer::compose_status_segments;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::git::{detached_branch_name, GitBackend};
use crate::core::segment::{Segment, SegmentSink};
use crate::core::stats::{parse_git_stats, RepoStats};
use serde::Serialize;

pub const BRANCH_GROUP: &str = "git-branch";
pub const STATUS_GROUP: &str = "git-status";

/// Everything the git segment learned about the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSnapshot {
    pub branch: String,
    pub dirty: bool,
    pub stats: RepoStats,
}

/// Query the backend and build the full repository snapshot.
///
/// Returns `Ok(None)` for repositories on the ignore list.
pub fn collect_snapshot(
    backend: &dyn GitBackend,
    config: &Config,
) -> Result<Option<RepoSnapshot>> {
    if !config.ignore_repos.is_empty() {
        let toplevel = backend.toplevel()?;
        if config.is_ignored(&toplevel) {
            log::debug!("Repository {} is ignored", toplevel.display());
            return Ok(None);
        }
    }

    let out = backend.status_porcelain()?;
    let status: Vec<&str> = out.lines().collect();
    let mut stats = parse_git_stats(&status);
    let branch_info = BranchInfo::from_status_lines(&status);

    let branch = match branch_info.local() {
        Some(local) => {
            stats.apply_branch_info(&branch_info);
            local.to_string()
        }
        None => detached_branch_name(backend, &config.symbols().detached),
    };

    let dirty = stats.is_dirty();

    let stash = backend.stash_list()?;
    stats.apply_stash_report(&stash);

    log::debug!("Branch {branch} dirty={dirty} stats={stats:?}");
    Ok(Some(RepoSnapshot {
        branch,
        dirty,
        stats,
    }))
}

/// Append the branch segment followed by the status segments
pub fn append_snapshot(snapshot: &RepoSnapshot, config: &Config, sink: &mut dyn SegmentSink) {
    let colors = config.theme.branch_colors(snapshot.dirty);
    let status_segments =
        compose_status_segments(&snapshot.stats, &config.symbols(), &config.theme, colors.bg);

    sink.append_segment(BRANCH_GROUP, Segment::new(snapshot.branch.clone(), colors));
    for segment in status_segments {
        sink.append_segment(STATUS_GROUP, segment);
    }
}

/// Add the git segments for the repository `backend` points at.
///
/// Failing git queries leave `sink` untouched. Leaving the repository is logged at
/// debug level, anything else at info; neither reaches a default prompt.
pub fn segment_git(backend: &dyn GitBackend, config: &Config, sink: &mut dyn SegmentSink) {
    match collect_snapshot(backend, config) {
        Ok(Some(snapshot)) => append_snapshot(&snapshot, config, sink),
        Ok(None) => {}
        Err(e) if e.is_outside_repository() => log::debug!("Skipping git segment: {e}"),
        Err(e) => log::info!("Skipping git segment: {e}"),
    }
}
