//! CLI domain: clap definitions, config resolution, and user-facing error
//! mapping. No traversal logic; the single command dispatches to the
//! snapshot API.

use crate::api;
use crate::config::{ConfigLoader, SeedfsConfig};
use crate::error::SnapshotError;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Seedfs CLI - serialize a directory tree into a virtual filesystem seed document
#[derive(Parser)]
#[command(name = "seedfs")]
#[command(about = "Serialize a directory tree into JSON seed data for an in-browser virtual filesystem")]
pub struct Cli {
    /// Directory tree to serialize (overrides configuration)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Destination file for the seed document (overrides configuration)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Configuration file path (overrides default config discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Silence all logging
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

/// Resolve the effective configuration for this invocation.
///
/// Precedence: CLI flags override the config file, which overrides defaults.
/// With no `--config`, `seedfs.toml` is discovered in the current directory.
pub fn resolve_config(cli: &Cli) -> Result<SeedfsConfig, SnapshotError> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load(Path::new("."))?,
    };

    if let Some(root) = &cli.root {
        config.snapshot.root = root.clone();
    }
    if let Some(output) = &cli.output {
        config.snapshot.output = output.clone();
    }

    Ok(config)
}

/// Run the full traversal-and-write and format a one-line summary.
pub fn execute(config: &SeedfsConfig) -> Result<String, SnapshotError> {
    let report = api::write_snapshot(&config.snapshot)?;
    Ok(format!(
        "Wrote {} ({} files, {} directories, {} bytes)",
        report.output.display(),
        report.files,
        report.directories,
        report.bytes_written
    ))
}

/// Map an error to a user-facing message with a hint where one helps.
pub fn map_error(err: &SnapshotError) -> String {
    match err {
        SnapshotError::RootNotFound(path) => format!(
            "error: root directory {:?} does not exist; pass --root or set [snapshot] root in seedfs.toml",
            path
        ),
        SnapshotError::NotADirectory(path) => {
            format!("error: root path {:?} is not a directory", path)
        }
        SnapshotError::ReadFile { path, source } => format!(
            "error: could not read {:?} as text: {} (the snapshot is all-or-nothing; fix or remove the entry)",
            path, source
        ),
        SnapshotError::WriteOutput { path, source } => format!(
            "error: could not write output {:?}: {} (parent directories are not created automatically)",
            path, source
        ),
        other => format!("error: {}", other),
    }
}
