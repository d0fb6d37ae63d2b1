//! Document builder: assembles the nested seed document from walked entries

use crate::error::SnapshotError;
use crate::tree::walker::{Entry, Walker};
use serde_json::{Map, Value};
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Reserved marker prepended to every structural key in the output document.
///
/// The virtual filesystem runtime uses this marker to tell directory entries
/// apart from any other fields it may store at the same mapping level.
pub const KEY_TAG: char = '$';

/// Tag an entry name for use as a structural key.
///
/// The name is prefixed literally, with no escaping: an entry named `$x`
/// becomes the key `$$x`. Names that already start with the marker are a
/// latent ambiguity for the consumer, inherited from the on-disk format.
pub fn tag_name(name: &str) -> String {
    format!("{}{}", KEY_TAG, name)
}

/// Strip the reserved marker from a structural key, recovering the exact
/// original entry name. Returns `None` for keys that carry no marker.
pub fn untag_name(key: &str) -> Option<&str> {
    key.strip_prefix(KEY_TAG)
}

/// Builds the nested seed document for a directory tree.
///
/// Directories become JSON objects, regular files become string leaves
/// holding the complete file text, and every key is the entry name tagged
/// with [`KEY_TAG`]. The root directory itself is unkeyed; the top-level
/// object holds its immediate children.
pub struct DocumentBuilder {
    root: PathBuf,
}

impl DocumentBuilder {
    /// Create a new builder for the given root path.
    ///
    /// The root is expected to exist and be a directory; resolve it with
    /// [`crate::tree::path::resolve_root`] first.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Build the complete document from the filesystem.
    ///
    /// Traversal is read-only and all-or-nothing: any listing failure, any
    /// entry name that is not valid UTF-8, and any file that cannot be read
    /// as UTF-8 text abort the whole build. There
    /// is no per-file recovery and unreadable content is never substituted
    /// with an empty string, so a successful build is always a faithful
    /// snapshot of the tree at the time the walk ran.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Value, SnapshotError> {
        let start = Instant::now();
        info!("Starting snapshot build");

        let walker = Walker::new(self.root.clone());
        let entries = walker.walk()?;
        debug!(entry_count = entries.len(), "Walked filesystem");

        let mut document = Map::new();
        let mut file_count = 0usize;
        let mut dir_count = 0usize;
        let mut total_bytes = 0u64;

        // Entries are path-sorted, so a directory's mapping is always
        // inserted before any of its children are placed into it.
        for entry in &entries {
            let rel = entry.path().strip_prefix(&self.root).map_err(|_| {
                SnapshotError::InvalidPath(format!(
                    "Entry {:?} is outside root {:?}",
                    entry.path(),
                    self.root
                ))
            })?;

            match entry {
                Entry::File { path, size } => {
                    trace!(path = %path.display(), "Reading file");
                    let content =
                        std::fs::read_to_string(path).map_err(|e| SnapshotError::ReadFile {
                            path: path.clone(),
                            source: e,
                        })?;
                    insert_entry(&mut document, rel, Value::String(content))?;
                    file_count += 1;
                    total_bytes += size;
                }
                Entry::Directory { .. } => {
                    insert_entry(&mut document, rel, Value::Object(Map::new()))?;
                    dir_count += 1;
                }
            }
        }

        let duration = start.elapsed();
        info!(
            file_count,
            dir_count,
            total_bytes,
            duration_ms = duration.as_millis(),
            "Snapshot build completed"
        );

        Ok(Value::Object(document))
    }
}

/// Insert a value into the document at the tagged key path for `rel`.
///
/// All intermediate components must already exist as objects, which the
/// path-sorted walk guarantees.
fn insert_entry(
    document: &mut Map<String, Value>,
    rel: &Path,
    value: Value,
) -> Result<(), SnapshotError> {
    let mut names = Vec::new();
    for component in rel.components() {
        if let Component::Normal(name) = component {
            // Names must decode exactly: lossy conversion could collapse two
            // distinct siblings into one key and silently drop content
            let name = name
                .to_str()
                .ok_or_else(|| SnapshotError::NonUtf8Name(rel.to_path_buf()))?;
            names.push(name);
        }
    }

    let (leaf, parents) = names
        .split_last()
        .ok_or_else(|| SnapshotError::InvalidPath(format!("Empty relative path: {:?}", rel)))?;

    let mut node = document;
    for name in parents {
        let key = tag_name(name);
        node = node
            .get_mut(&key)
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                SnapshotError::InvalidPath(format!(
                    "Missing parent mapping for {:?} at component {:?}",
                    rel, name
                ))
            })?;
    }

    node.insert(tag_name(leaf), value);
    Ok(())
}
