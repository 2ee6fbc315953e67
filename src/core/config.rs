//! Theme, symbol and repository filter configuration.
//!
//! Everything here is plain data handed to the segment composer; nothing reads it
//! from global state. The on-disk format is JSON and every field is optional, so a
//! config file only needs to mention what it changes:
//!
//! ```json
//! {
//!   "mode": "compatible",
//!   "theme": { "repo_dirty": { "fg": 15, "bg": 124 } },
//!   "ignore_repos": ["/home/me/huge-monorepo"]
//! }
//! ```

use crate::core::dirs::get_config_file;
use crate::core::error::{PowerlineError, Result};
use crate::core::segment::Shell;
use crate::core::stats::StatKind;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Foreground and background as ANSI 256 color indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub fg: u8,
    pub bg: u8,
}

impl ColorPair {
    pub const fn new(fg: u8, bg: u8) -> Self {
        Self { fg, bg }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub repo_clean: ColorPair,
    pub repo_dirty: ColorPair,
    pub ahead: ColorPair,
    pub behind: ColorPair,
    pub staged: ColorPair,
    pub not_staged: ColorPair,
    pub conflicted: ColorPair,
    pub stashed: ColorPair,
    pub untracked: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            repo_clean: ColorPair::new(0, 148),
            repo_dirty: ColorPair::new(15, 161),
            ahead: ColorPair::new(250, 240),
            behind: ColorPair::new(250, 240),
            staged: ColorPair::new(15, 22),
            not_staged: ColorPair::new(15, 130),
            conflicted: ColorPair::new(15, 9),
            stashed: ColorPair::new(15, 20),
            untracked: ColorPair::new(15, 52),
        }
    }
}

impl Theme {
    pub fn colors_for(&self, kind: StatKind) -> ColorPair {
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

    /// Colors of the branch segment and the closing cap
    pub fn branch_colors(&self, dirty: bool) -> ColorPair {
        if dirty {
            self.repo_dirty
        } else {
            self.repo_clean
        }
    }
}

/// Glyph set presets, depending on what the terminal font can draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SymbolMode {
    /// Powerline-patched font
    #[default]
    Patched,
    /// Plain unicode arrows
    Compatible,
    /// No separators at all
    Flat,
}

/// Glyphs drawn in the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub ahead: String,
    pub behind: String,
    pub staged: String,
    pub not_staged: String,
    pub conflicted: String,
    pub stashed: String,
    pub untracked: String,
    pub detached: String,
    pub separator: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self::for_mode(SymbolMode::Patched)
    }
}

impl Symbols {
    pub fn for_mode(mode: SymbolMode) -> Self {
        let separator = match mode {
            SymbolMode::Patched => "\u{E0B0}",
            SymbolMode::Compatible => "\u{25B6}",
            SymbolMode::Flat => "",
        };

        Self {
            ahead: "\u{2B06}".to_string(),
            behind: "\u{2B07}".to_string(),
            staged: "\u{2714}".to_string(),
            not_staged: "\u{270E}".to_string(),
            conflicted: "\u{273C}".to_string(),
            stashed: "\u{2691}".to_string(),
            untracked: "+".to_string(),
            detached: "\u{2693}".to_string(),
            separator: separator.to_string(),
        }
    }

    pub fn symbol_for(&self, kind: StatKind) -> &str {
        match kind {
            StatKind::Ahead => &self.ahead,
            StatKind::Behind => &self.behind,
            StatKind::Staged => &self.staged,
            StatKind::NotStaged => &self.not_staged,
            StatKind::Conflicted => &self.conflicted,
            StatKind::Stashed => &self.stashed,
            StatKind::Untracked => &self.untracked,
        }
    }
}

/// Per-glyph overrides from the config file, layered over the `mode` preset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ahead: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staged: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_staged: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stashed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untracked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detached: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

impl SymbolOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Replace the glyphs of `symbols` that have an override
    pub fn apply_to(&self, mut symbols: Symbols) -> Symbols {
        let fields = [
            (&self.ahead, &mut symbols.ahead),
            (&self.behind, &mut symbols.behind),
            (&self.staged, &mut symbols.staged),
            (&self.not_staged, &mut symbols.not_staged),
            (&self.conflicted, &mut symbols.conflicted),
            (&self.stashed, &mut symbols.stashed),
            (&self.untracked, &mut symbols.untracked),
            (&self.detached, &mut symbols.detached),
            (&self.separator, &mut symbols.separator),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }
        symbols
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shell: Shell,
    pub mode: SymbolMode,
    pub theme: Theme,
    /// Glyphs that differ from the preset of `mode`
    #[serde(skip_serializing_if = "SymbolOverrides::is_empty")]
    pub symbols: SymbolOverrides,
    /// Repository top-level directories that never get a git segment
    pub ignore_repos: Vec<PathBuf>,
}

impl Config {
    /// Load the config file at `path`, or the default location when `None`.
    ///
    /// A missing file at the default location means defaults; a missing file that
    /// was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = match get_config_file() {
                    Ok(path) => path,
                    Err(e) => {
                        log::debug!("No config directory, using defaults: {e}");
                        return Ok(Self::default());
                    }
                };
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| PowerlineError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| PowerlineError::config_parse_failed(path, e))
    }

    /// Symbols in effect: the `mode` preset with the configured overrides on top
    pub fn symbols(&self) -> Symbols {
        self.symbols.apply_to(Symbols::for_mode(self.mode))
    }

    pub fn is_ignored(&self, toplevel: &Path) -> bool {
        let toplevel = normalize(toplevel);
        self.ignore_repos
            .iter()
            .any(|ignored| normalize(ignored) == toplevel)
    }
}

fn normalize(path: &Path) -> PathBuf {
    let trimmed = path.to_string_lossy();
    let trimmed = trimmed.trim_end_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(trimmed)
    }
}
