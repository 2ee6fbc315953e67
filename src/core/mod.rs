//! Core functionality for the git-powerline tool.
//!
//! This module provides the building blocks of the git prompt segment: status
//! classification, segment composition, configuration, git access and rendering.

pub mod branch_info;
pub mod composer;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod git_segment;
pub mod git_status;
pub mod output;
pub mod segment;
pub mod stats;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{PowerlineError, Result};

// === Status classification ===
// Porcelain status codes and the counters built from them
pub use git_status::{FileChange, UNMERGED_CODES};
pub use stats::{count_stash_entries, parse_git_stats, RepoStats, StatKind};

// === Branch header ===
// Fields of the `## local...remote [ahead N, behind M]` line
pub use branch_info::BranchInfo;

// === Git access ===
// Raw reports from the repository, swappable for tests
pub use git::{detached_branch_name, GitBackend, GitCli};

// === Segments ===
// Segment composition, the git segment itself and rendering
pub use composer::{compose_status_segments, CountDisplay, STATUS_SEGMENTS};
pub use git_segment::{
    append_snapshot, collect_snapshot, segment_git, RepoSnapshot, BRANCH_GROUP, STATUS_GROUP,
};
pub use segment::{GroupedSegment, Powerline, Segment, SegmentSink, Shell};

// === Configuration ===
// Theme, symbols and ignored repositories
pub use config::{ColorPair, Config, SymbolMode, SymbolOverrides, Symbols, Theme};

// === Output formatting ===
// Messages for the interactive subcommands
pub use output::{print_error, print_json};
