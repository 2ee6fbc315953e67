//! Parser for the `## ...` branch header of `git status --porcelain -b`.
//!
//! The header looks like one of:
//!
//! ```text
//! ## main
//! ## main...origin/main
//! ## main...origin/main [ahead 1, behind 2]
//! ## main...origin/main [gone]
//! ## HEAD (no branch)
//! ## No commits yet on main
//! ```
//!
//! The result is a plain field-name to value mapping. Headers that do not name a
//! local branch produce an empty mapping, which callers treat as a detached HEAD.

use std::collections::HashMap;

const HEADER_PREFIX: &str = "## ";
const REMOTE_SEPARATOR: &str = "...";

/// Branch tracking fields extracted from a porcelain header line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchInfo {
    fields: HashMap<String, String>,
}

impl BranchInfo {
    pub const LOCAL: &'static str = "local";
    pub const REMOTE: &'static str = "remote";
    pub const AHEAD: &'static str = "ahead";
    pub const BEHIND: &'static str = "behind";

    /// Parse a header line. Never fails; unknown shapes yield an empty mapping.
    pub fn parse(line: &str) -> BranchInfo {
        let mut info = BranchInfo::default();

        let Some(rest) = line.trim_end().strip_prefix(HEADER_PREFIX) else {
            return info;
        };

        let (head, tracking) = match rest.find(" [") {
            Some(idx) if rest.ends_with(']') => {
                (&rest[..idx], Some(&rest[idx + 2..rest.len() - 1]))
            }
            _ => (rest, None),
        };

        // "HEAD (no branch)" and "No commits yet on main" both contain spaces
        if head.is_empty() || head.contains(char::is_whitespace) {
            return info;
        }

        let (local, remote) = match head.find(REMOTE_SEPARATOR) {
            Some(idx) => (&head[..idx], Some(&head[idx + REMOTE_SEPARATOR.len()..])),
            None => (head, None),
        };
        if local.is_empty() {
            return info;
        }

        info.insert(Self::LOCAL, local);
        if let Some(remote) = remote.filter(|r| !r.is_empty()) {
            info.insert(Self::REMOTE, remote);
        }

        for part in tracking.into_iter().flat_map(|t| t.split(", ")) {
            if let Some(count) = part.strip_prefix("ahead ") {
                info.insert(Self::AHEAD, count);
            } else if let Some(count) = part.strip_prefix("behind ") {
                info.insert(Self::BEHIND, count);
            }
        }

        info
    }

    /// Parse the first line of a full porcelain report
    pub fn from_status_lines<S: AsRef<str>>(lines: &[S]) -> BranchInfo {
        lines
            .first()
            .map(|line| Self::parse(line.as_ref()))
            .unwrap_or_default()
    }

    /// Build a mapping directly from field/value pairs
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> BranchInfo {
        let mut info = BranchInfo::default();
        for (key, value) in fields {
            info.insert(key, value);
        }
        info
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Local branch name, if the header named one
    pub fn local(&self) -> Option<&str> {
        self.get(Self::LOCAL).filter(|name| !name.is_empty())
    }
}
