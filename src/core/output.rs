//! Output helpers for the interactive subcommands.
//!
//! The prompt itself is written raw by the `prompt` command. Everything else a human
//! reads goes through here so errors look the same in every command.
//!
//! # Design Principles
//! - **Errors on stderr**: stdout may be captured by a shell or piped into `jq`
//! - **Consistent color scheme**: Red error prefix, white message

use crate::core::error::Result;
use colored::*;
use serde::Serialize;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_json() -> Result<()> {
        print_json(&serde_json::json!({ "branch": "main" }))
    }
}
