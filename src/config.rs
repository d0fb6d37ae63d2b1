//! Configuration System
//!
//! Explicit path configuration for the snapshot run plus layered loading:
//! built-in defaults, an optional `seedfs.toml` file, and `SEEDFS__*`
//! environment overrides. The process working directory is never changed;
//! all paths are carried in the configuration and resolved at use.

use crate::error::SnapshotError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the config directory
pub const CONFIG_FILE_NAME: &str = "seedfs.toml";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeedfsConfig {
    /// Snapshot input/output paths
    #[serde(default)]
    pub snapshot: SnapshotConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Paths for one snapshot run.
///
/// Relative paths are interpreted against the process working directory at
/// invocation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Directory tree to serialize
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Destination file for the seed document
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from("fs")
}

fn default_output() -> PathBuf {
    PathBuf::from("www/data/default-filesystem.json")
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
        }
    }
}

/// Layered configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a run rooted at `dir`.
    ///
    /// Precedence (lowest to highest): defaults, `<dir>/seedfs.toml` if
    /// present, then `SEEDFS__*` environment variables
    /// (e.g. `SEEDFS__SNAPSHOT__ROOT`).
    pub fn load(dir: &Path) -> Result<SeedfsConfig, SnapshotError> {
        let mut builder = Config::builder();

        let config_file = dir.join(CONFIG_FILE_NAME);
        if config_file.exists() {
            builder = builder.add_source(
                File::with_name(&config_file.to_string_lossy()).required(false),
            );
        }

        builder = builder.add_source(Environment::with_prefix("SEEDFS").separator("__"));

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from an explicit file, skipping discovery and
    /// environment overrides.
    pub fn load_from_file(path: &Path) -> Result<SeedfsConfig, SnapshotError> {
        let config = Config::builder()
            .add_source(File::with_name(&path.to_string_lossy()))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
