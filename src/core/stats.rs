//! Repository change counters.
//!
//! [`RepoStats`] is built fresh for every prompt: [`parse_git_stats`] fills the per-file
//! counters from a porcelain report, then the caller overlays the ahead/behind counts
//! from the branch header and the stash count from `git stash list`.

use crate::core::branch_info::BranchInfo;
use crate::core::git_status::FileChange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counters describing the state of a repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    pub ahead: usize,
    pub behind: usize,
    pub untracked: usize,
    pub not_staged: usize,
    pub staged: usize,
    pub conflicted: usize,
    pub stashed: usize,
}

/// The seven categories a [`RepoStats`] counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Ahead,
    Behind,
    Staged,
    NotStaged,
    Conflicted,
    Stashed,
    Untracked,
}

impl StatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Ahead => "ahead",
            StatKind::Behind => "behind",
            StatKind::Staged => "staged",
            StatKind::NotStaged => "not_staged",
            StatKind::Conflicted => "conflicted",
            StatKind::Stashed => "stashed",
            StatKind::Untracked => "untracked",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RepoStats {
    /// Staged, unstaged or conflicted changes are present.
    ///
    /// Ahead/behind, untracked files and stashes never make a repository dirty.
    pub fn is_dirty(&self) -> bool {
        self.not_staged + self.staged + self.conflicted > 0
    }

    pub fn count(&self, kind: StatKind) -> usize {
        match kind {
            StatKind::Ahead => self.ahead,
            StatKind::Behind => self.behind,
            StatKind::Staged => self.staged,
            StatKind::NotStaged => self.not_staged,
            StatKind::Conflicted => self.conflicted,
            StatKind::Stashed => self.stashed,
            StatKind::Untracked => self.untracked,
        }
    }

    /// Count one classified file line
    pub fn record(&mut self, change: FileChange) {
        match change {
            FileChange::Untracked => self.untracked += 1,
            FileChange::Conflicted => self.conflicted += 1,
            FileChange::Changed { staged, not_staged } => {
                if staged {
                    self.staged += 1;
                }
                if not_staged {
                    self.not_staged += 1;
                }
            }
        }
    }

    /// Take ahead/behind from the branch header fields.
    ///
    /// Missing or non-numeric values count as zero.
    pub fn apply_branch_info(&mut self, info: &BranchInfo) {
        self.ahead = parse_count(info.get(BranchInfo::AHEAD));
        self.behind = parse_count(info.get(BranchInfo::BEHIND));
    }

    /// Take the stash count from a `git stash list` report
    pub fn apply_stash_report(&mut self, report: &str) {
        self.stashed = count_stash_entries(report);
    }
}

fn parse_count(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0)
}

/// Classify the file lines of a porcelain report.
///
/// The first line is the branch header and is ignored. Lines too short to carry a
/// status code are skipped. Ahead, behind and stashed are left at zero.
pub fn parse_git_stats<S: AsRef<str>>(status: &[S]) -> RepoStats {
    let mut stats = RepoStats::default();

    for line in status.iter().skip(1) {
        if let Some(change) = FileChange::classify(line.as_ref()) {
            log::debug!("{change}: {}", line.as_ref());
            stats.record(change);
        }
    }

    stats
}

/// Number of entries in a `git stash list` report
pub fn count_stash_entries(report: &str) -> usize {
    report.lines().filter(|line| !line.trim().is_empty()).count()
}
