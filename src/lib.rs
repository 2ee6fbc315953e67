//! Git Powerline - git status segments for powerline-style shell prompts.
//!
//! This library reads `git status --porcelain -b` and `git stash list`, counts the
//! repository's changes into a [`RepoStats`] and turns those counters into colored
//! prompt segments. It is built to run on every prompt, so it stays silent outside
//! repositories and never fails halfway through a segment.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Status classification and counters
//! - Segment composition and rendering
//! - Git access behind the [`GitBackend`] trait
//! - Theme and symbol configuration
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    compose_status_segments,
    parse_git_stats,
    segment_git,

    BranchInfo,
    // Configuration
    Config,
    // Git access
    GitBackend,
    GitCli,
    // Segments
    Powerline,
    // Error handling
    PowerlineError,
    // Status classification
    RepoStats,
    Result,
    Segment,
    SegmentSink,
    Shell,
    StatKind,
    SymbolMode,
    Symbols,
    Theme,
};
