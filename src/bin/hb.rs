//! hb CLI Binary
//!
//! Command-line interface for content-addressed renaming.

use clap::Parser;
use hashbrowns::cli::{exit_code, map_error, Cli, RunContext};
use hashbrowns::config::ConfigLoader;
use hashbrowns::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = match build_logging_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("hb starting");

    let context = RunContext::new(cli.format);
    let result = context.execute(&cli);
    let code = exit_code(&result);

    match result {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
        }
    }

    process::exit(code);
}

/// Build logging configuration from CLI args, environment, and config file
fn build_logging_config(cli: &Cli) -> Result<LoggingConfig, hashbrowns::error::ConfigError> {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        return Ok(LoggingConfig::disabled());
    }

    let mut config = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path)?.logging,
        None => ConfigLoader::load()?.logging,
    };

    // Override with CLI arguments (highest priority)
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    Ok(config)
}
