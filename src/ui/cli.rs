// Command-line interface definitions and parsing for rawlinks

use crate::config::CliConfig;
use clap::Parser;

/// Print a raw-content URL for every file under the configured source tree.
///
/// The root directory and both prefixes come from the built-in defaults or
/// from a `.rawlinks.toml` config file; they are not taken as arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Output & Verbosity
    /// Suppress all log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging on stderr
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration", conflicts_with = "config")]
    pub no_config: bool,
}

/// Convert the parsed CLI into a CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        config_file: cli.config.clone(),
        no_config: cli.no_config,
        verbose: cli.verbose,
        quiet: cli.quiet,
    }
}
