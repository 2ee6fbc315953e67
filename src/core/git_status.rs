//! Classification of porcelain status codes.
//!
//! Every file line of `git status --porcelain` starts with a two character code:
//! the first character is the index (staged) state, the second one the work tree
//! state. [`FileChange`] turns such a line into the single category it counts towards.
//!
//! # Classification order
//! 1. `??` is an untracked file.
//! 2. One of [`UNMERGED_CODES`] is a conflict, and nothing else.
//! 3. Anything else is read per character: a non-space first character is a staged
//!    change, a non-space second character an unstaged one. Both may apply.
//!
//! The conflict check has to run before the per-character pass, otherwise a `UU`
//! file would be counted as both staged and not staged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status codes git uses for paths with unresolved merge conflicts
pub const UNMERGED_CODES: [&str; 7] = ["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

/// Status code for files git does not track
pub const UNTRACKED_CODE: &str = "??";

/// What a single porcelain file line contributes to the repository stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileChange {
    /// Not registered with git (`??`)
    Untracked,
    /// Unresolved merge or rebase conflict (`UU`, `AA`, ...)
    Conflicted,
    /// Regular change; a partially staged file sets both flags
    Changed { staged: bool, not_staged: bool },
}

impl FileChange {
    /// Classify one porcelain line.
    ///
    /// Returns `None` for lines too short to hold a code and a path. Those are
    /// skipped by the caller instead of being treated as errors.
    pub fn classify(line: &str) -> Option<FileChange> {
        if line.len() < 3 {
            return None;
        }
        let code = line.get(..2)?;
        Some(Self::from_code(code))
    }

    /// Classify a bare two character status code
    pub fn from_code(code: &str) -> FileChange {
        if code == UNTRACKED_CODE {
            return FileChange::Untracked;
        }
        if UNMERGED_CODES.contains(&code) {
            return FileChange::Conflicted;
        }

        let mut chars = code.chars();
        let index = chars.next().unwrap_or(' ');
        let worktree = chars.next().unwrap_or(' ');
        FileChange::Changed {
            staged: index != ' ',
            not_staged: worktree != ' ',
        }
    }

    pub fn is_staged(&self) -> bool {
        matches!(self, FileChange::Changed { staged: true, .. })
    }

    pub fn is_not_staged(&self) -> bool {
        matches!(
            self,
            FileChange::Changed {
                not_staged: true,
                ..
            }
        )
    }

    /// Human-readable description, used in debug logs
    pub fn description(&self) -> &'static str {
        match self {
            FileChange::Untracked => "untracked",
            FileChange::Conflicted => "conflicted",
            FileChange::Changed {
                staged: true,
                not_staged: true,
            } => "partially staged",
            FileChange::Changed { staged: true, .. } => "staged",
            FileChange::Changed {
                not_staged: true, ..
            } => "not staged",
            FileChange::Changed { .. } => "unchanged",
        }
    }
}

impl fmt::Display for FileChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
