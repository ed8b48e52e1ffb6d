use clap::Parser;
use rawlinks::config::{CliConfig, Config};
use rawlinks::logging;
use rawlinks::ui::{Cli, cli_to_config};

use std::io::{self, BufWriter};

fn main() {
    let cli = Cli::parse();

    match run_rawlinks_logic(&cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main listing logic extracted from main() for testing
pub fn run_rawlinks_logic(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;
    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    rawlinks::run(&config, &mut out)?;

    Ok(())
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    Ok(config)
}
