//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`PowerlineError`] which covers every fallible operation in
//! git-powerline. Almost all of them sit at the edges: running `git`, discovering the
//! repository and loading the configuration file. Status classification and segment
//! composition are total and never produce an error.
//!
//! # Public API
//! - [`PowerlineError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PowerlineError>`
//!
//! # Error Categories
//! - **Git operations**: Repository not found, git2 discovery errors, failed git commands
//! - **Output decoding**: Non UTF-8 command output
//! - **Configuration**: Missing config directory, unreadable or malformed config files

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-powerline
#[derive(Error, Debug)]
pub enum PowerlineError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Repository has no working directory")]
    BareRepository,

    #[error("Failed to run 'git {command}': {source}")]
    GitSpawnFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("'git {command}' failed: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    #[error("Invalid UTF-8 in git output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using PowerlineError
pub type Result<T> = std::result::Result<T, PowerlineError>;

impl PowerlineError {
    /// Create a spawn failure error for a git invocation
    pub fn git_spawn_failed(args: &[&str], source: std::io::Error) -> Self {
        Self::GitSpawnFailed {
            command: args.join(" "),
            source,
        }
    }

    /// Create a failed git command error from its stderr output
    pub fn git_command_failed(args: &[&str], stderr: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: args.join(" "),
            stderr: stderr.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Whether this error only means "nothing to show here".
    ///
    /// The prompt treats these as a silent skip rather than something worth reporting.
    pub fn is_outside_repository(&self) -> bool {
        match self {
            Self::NotInGitRepo | Self::BareRepository => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PowerlineError::NotInGitRepo;
        assert_eq!(err.to_string(), "Not in a git repository");
    }

    #[test]
    fn test_git_command_failed() {
        let err = PowerlineError::git_command_failed(
            &["status", "--porcelain"],
            "fatal: not a git repository",
        );
        assert_eq!(
            err.to_string(),
            "'git status --porcelain' failed: fatal: not a git repository"
        );
    }

    #[test]
    fn test_git_spawn_failed() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = PowerlineError::git_spawn_failed(&["stash", "list"], io_err);
        assert!(err.to_string().contains("git stash list"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_config_read_failed() {
        let path = std::path::PathBuf::from("/test/config.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = PowerlineError::config_read_failed(&path, io_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_config_parse_failed() {
        let path = std::path::PathBuf::from("/test/config.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = PowerlineError::config_parse_failed(&path, json_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_outside_repository_classification() {
        assert!(PowerlineError::NotInGitRepo.is_outside_repository());
        assert!(PowerlineError::BareRepository.is_outside_repository());
        assert!(!PowerlineError::GitRepo(git2::Error::from_str("boom")).is_outside_repository());
        assert!(!PowerlineError::git_command_failed(&["status"], "fatal").is_outside_repository());
    }
}
