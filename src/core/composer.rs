//! Turns [`RepoStats`] into status segments.
//!
//! The order and shape of the segments is the [`STATUS_SEGMENTS`] table. Only
//! categories with a non-zero counter produce a segment, and the run is always
//! closed by a blank cap in the branch color.

use crate::core::config::{Symbols, Theme};
use crate::core::segment::Segment;
use crate::core::stats::{RepoStats, StatKind};

/// Whether a status segment shows its counter in front of the symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountDisplay {
    /// `3⬆`
    Counted,
    /// `⚑`, the counter only decides whether the segment appears
    SymbolOnly,
}

/// Emission order of the status segments
pub const STATUS_SEGMENTS: [(StatKind, CountDisplay); 7] = [
    (StatKind::Ahead, CountDisplay::Counted),
    (StatKind::Behind, CountDisplay::Counted),
    (StatKind::Staged, CountDisplay::Counted),
    (StatKind::NotStaged, CountDisplay::Counted),
    (StatKind::Conflicted, CountDisplay::Counted),
    (StatKind::Stashed, CountDisplay::SymbolOnly),
    (StatKind::Untracked, CountDisplay::SymbolOnly),
];

/// Build the status segments for `stats`, closed by a cap of `cap_background`
pub fn compose_status_segments(
    stats: &RepoStats,
    symbols: &Symbols,
    theme: &Theme,
    cap_background: u8,
) -> Vec<Segment> {
    let mut segments: Vec<Segment> = STATUS_SEGMENTS
        .iter()
        .filter_map(|&(kind, display)| {
            let count = stats.count(kind);
            if count == 0 {
                return None;
            }

            let symbol = symbols.symbol_for(kind);
            let content = match display {
                CountDisplay::Counted => format!("{count}{symbol}"),
                CountDisplay::SymbolOnly => symbol.to_string(),
            };
            Some(Segment::new(content, theme.colors_for(kind)).without_separators())
        })
        .collect();

    segments.push(Segment::cap(cap_background));
    segments
}
