//! User interface
//!
//! This module contains CLI parsing for the rawlinks binary.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
