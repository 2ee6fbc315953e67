use crate::core::{config::Config, error::Result, output::print_json};

/// Print the built-in configuration, ready to be saved as a config file
pub fn execute_default_config() -> Result<()> {
    print_json(&Config::default())
}
