use crate::core::error::{PowerlineError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "git-powerline";
const CONFIG_FILE: &str = "config.json";

/// Directory holding the git-powerline configuration.
///
/// Honors `XDG_CONFIG_HOME` on unix-likes, falling back to `~/.config`.
pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var_os("XDG_CONFIG_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join(APP_DIR))
        .ok_or(PowerlineError::ConfigDirectoryNotFound)
}

/// Default location of the configuration file
pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_config_directory()?.join(CONFIG_FILE))
}
