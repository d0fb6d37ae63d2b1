//! Seedfs CLI Binary
//!
//! Command-line entry point: one full traversal-and-write per invocation.

use clap::Parser;
use seedfs::cli::{self, Cli};
use seedfs::config::ConfigLoader;
use seedfs::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Seedfs starting");

    let config = match cli::resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to resolve configuration: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(1);
        }
    };

    match cli::execute(&config) {
        Ok(output) => {
            info!("Snapshot completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Snapshot failed: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(std::path::Path::new("."))
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.quiet {
        config.level = "off".to_string();
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
