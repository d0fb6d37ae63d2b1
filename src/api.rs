//! Snapshot API
//!
//! The single end-to-end operation: resolve the configured root, build the
//! seed document, and write it to the configured output path.

use crate::config::SnapshotConfig;
use crate::error::SnapshotError;
use crate::tree::builder::DocumentBuilder;
use crate::tree::path;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Summary of a completed snapshot run, for CLI display.
#[derive(Debug, Clone)]
pub struct SnapshotReport {
    /// Path the document was written to
    pub output: PathBuf,
    /// Number of file leaves in the document
    pub files: usize,
    /// Number of directory mappings in the document (excluding the root)
    pub directories: usize,
    /// Size of the encoded document in bytes
    pub bytes_written: usize,
}

/// Build the seed document for `config.root` and write it to `config.output`.
///
/// The output file is only touched after traversal and encoding have fully
/// succeeded, so a failed run leaves any previously existing output intact.
/// Parent directories of the output path are not created; a missing parent
/// is a write failure like any other.
#[instrument(skip(config), fields(root = %config.root.display(), output = %config.output.display()))]
pub fn write_snapshot(config: &SnapshotConfig) -> Result<SnapshotReport, SnapshotError> {
    let root = path::resolve_root(&config.root)?;

    let document = DocumentBuilder::new(root).build()?;
    let (files, directories) = document_stats(&document);

    let text = serde_json::to_string(&document)?;
    std::fs::write(&config.output, &text).map_err(|e| SnapshotError::WriteOutput {
        path: config.output.clone(),
        source: e,
    })?;

    info!(
        files,
        directories,
        bytes_written = text.len(),
        "Snapshot written"
    );

    Ok(SnapshotReport {
        output: config.output.clone(),
        files,
        directories,
        bytes_written: text.len(),
    })
}

/// Count file leaves and directory mappings in a built document.
fn document_stats(document: &Value) -> (usize, usize) {
    let mut files = 0;
    let mut directories = 0;

    if let Value::Object(map) = document {
        for value in map.values() {
            match value {
                Value::String(_) => files += 1,
                Value::Object(_) => {
                    directories += 1;
                    let (f, d) = document_stats(value);
                    files += f;
                    directories += d;
                }
                _ => {}
            }
        }
    }

    (files, directories)
}
