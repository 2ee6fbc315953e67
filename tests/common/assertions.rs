//! Common assertion helpers for test output validation
//!
//! Provides predicates for the rendered prompt and for CLI error messages.

#![allow(dead_code)]

use git_powerline::core::config::Theme;
use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Raw ANSI background escape for a 256 color index
pub fn has_background(color: u8) -> impl Predicate<str> {
    predicates::str::contains(format!("\x1b[48;5;{color}m"))
}

/// Branch segment drawn with the dirty colors
pub fn is_dirty_prompt() -> impl Predicate<str> {
    has_background(Theme::default().repo_dirty.bg)
}

/// Branch segment drawn with the clean colors
pub fn is_clean_prompt() -> impl Predicate<str> {
    has_background(Theme::default().repo_clean.bg)
        .and(has_background(Theme::default().repo_dirty.bg).not())
}

/// Segment content as drawn, padded by one space on each side
pub fn has_segment(content: &str) -> impl Predicate<str> {
    predicates::str::contains(format!(" {content} "))
}
