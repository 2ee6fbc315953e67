//! Prompt segments and the powerline renderer.
//!
//! # Public API
//! - [`Segment`]: One colored block of prompt text
//! - [`SegmentSink`]: Append-only destination for segments, grouped by name
//! - [`Powerline`]: Default sink that renders its segments for a given [`Shell`]
//! - [`Shell`]: Escape dialect of the target prompt
//!
//! # Drawing
//! Each segment is drawn as ` content ` on its background. A separator glyph follows
//! every segment that does not hide its separators, and always follows the last one.
//! The separator takes the segment background as foreground and the next segment's
//! background as background, which produces the arrow look.

use crate::core::config::{ColorPair, Symbols};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One colored block of prompt text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub content: String,
    pub foreground: u8,
    pub background: u8,
    pub hide_separators: bool,
}

impl Segment {
    pub fn new(content: impl Into<String>, colors: ColorPair) -> Self {
        Self {
            content: content.into(),
            foreground: colors.fg,
            background: colors.bg,
            hide_separators: false,
        }
    }

    pub fn without_separators(mut self) -> Self {
        self.hide_separators = true;
        self
    }

    /// Empty block in a single color, used to close a run of segments
    pub fn cap(color: u8) -> Self {
        Self::new(String::new(), ColorPair::new(color, color))
    }
}

/// Append-only destination for prompt segments
pub trait SegmentSink {
    fn append_segment(&mut self, group: &str, segment: Segment);
}

impl SegmentSink for Vec<GroupedSegment> {
    fn append_segment(&mut self, group: &str, segment: Segment) {
        self.push(GroupedSegment {
            group: group.to_string(),
            segment,
        });
    }
}

/// A segment together with the group it was appended to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedSegment {
    pub group: String,
    #[serde(flatten)]
    pub segment: Segment,
}

/// Escape dialect of the shell the prompt is printed for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    /// `PS1` escapes wrapped in `\[ \]`
    #[default]
    Bash,
    /// Escapes wrapped in `%{ %}`
    Zsh,
    /// Raw ANSI escapes
    Bare,
}

impl Shell {
    fn wrap(&self, code: &str) -> String {
        match self {
            Shell::Bash => format!("\\[\\e{code}\\]"),
            Shell::Zsh => format!("%{{\x1b{code}%}}"),
            Shell::Bare => format!("\x1b{code}"),
        }
    }

    fn foreground(&self, color: u8) -> String {
        self.wrap(&format!("[38;5;{color}m"))
    }

    fn background(&self, color: u8) -> String {
        self.wrap(&format!("[48;5;{color}m"))
    }

    fn reset_background(&self) -> String {
        self.wrap("[49m")
    }

    fn reset(&self) -> String {
        self.wrap("[0m")
    }

    /// Escape characters the shell would otherwise expand inside the prompt
    pub fn escape(&self, content: &str) -> String {
        match self {
            Shell::Bash => content
                .replace('\\', "\\\\")
                .replace('$', "\\$")
                .replace('`', "\\`"),
            Shell::Zsh => content.replace('%', "%%"),
            Shell::Bare => content.to_string(),
        }
    }
}

/// Collects segments and renders them as a powerline prompt fragment
#[derive(Debug, Clone)]
pub struct Powerline {
    shell: Shell,
    separator: String,
    segments: Vec<GroupedSegment>,
}

impl Powerline {
    pub fn new(shell: Shell, symbols: &Symbols) -> Self {
        Self {
            shell,
            separator: symbols.separator.clone(),
            segments: Vec::new(),
        }
    }

    pub fn segments(&self) -> &[GroupedSegment] {
        &self.segments
    }

    /// Render all segments; an empty powerline renders as an empty string
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.segments.is_empty() {
            return out;
        }

        let shell = self.shell;
        for (idx, entry) in self.segments.iter().enumerate() {
            let segment = &entry.segment;
            out.push_str(&shell.foreground(segment.foreground));
            out.push_str(&shell.background(segment.background));
            if segment.content.is_empty() {
                out.push(' ');
            } else {
                out.push(' ');
                out.push_str(&shell.escape(&segment.content));
                out.push(' ');
            }

            let next = self.segments.get(idx + 1).map(|next| &next.segment);
            if !segment.hide_separators || next.is_none() {
                out.push_str(&shell.foreground(segment.background));
                match next {
                    Some(next) => out.push_str(&shell.background(next.background)),
                    None => out.push_str(&shell.reset_background()),
                }
                out.push_str(&self.separator);
            }
        }
        out.push_str(&shell.reset());
        out.push(' ');

        out
    }
}

impl SegmentSink for Powerline {
    fn append_segment(&mut self, group: &str, segment: Segment) {
        log::debug!(
            "append [{group}] {:?} fg={} bg={}",
            segment.content,
            segment.foreground,
            segment.background
        );
        self.segments.append_segment(group, segment);
    }
}
