//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod config;
mod logging;
mod picker;

pub use config::{ConfigSubcommand, handle_config_command};
pub use logging::*;
pub use picker::*;
