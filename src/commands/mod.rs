pub mod default_config;
pub mod prompt;
pub mod stats;

pub use default_config::*;
pub use prompt::*;
pub use stats::*;
