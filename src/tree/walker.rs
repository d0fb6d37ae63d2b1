//! Filesystem walker for traversing directory structures

use crate::error::SnapshotError;
use std::path::PathBuf;
use tracing::trace;
use walkdir::WalkDir;

/// Filesystem entry types
#[derive(Debug, Clone)]
pub enum Entry {
    /// A regular file entry with its path and size
    File { path: PathBuf, size: u64 },
    /// A directory entry with its path
    Directory { path: PathBuf },
}

impl Entry {
    /// The on-disk path of this entry.
    pub fn path(&self) -> &PathBuf {
        match self {
            Entry::File { path, .. } | Entry::Directory { path } => path,
        }
    }
}

/// Filesystem walker
///
/// Collects every regular file and directory beneath the root, to unlimited
/// depth and never following symlinks. Entries that are neither a regular
/// file nor a directory (symlinks, devices, sockets) are skipped silently;
/// the snapshot must simply not contain them. Listing or metadata failures
/// are fatal for the whole walk.
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Walk the filesystem and collect all entries
    ///
    /// Returns entries sorted by path, so every directory precedes its own
    /// contents and two walks over an unchanged tree yield the same order.
    pub fn walk(&self) -> Result<Vec<Entry>, SnapshotError> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root).follow_links(false);

        for entry in walker {
            let entry = entry?;
            let path = entry.path().to_path_buf();

            // Skip the root directory itself (we only want its contents)
            if path == self.root {
                continue;
            }

            let file_type = entry.file_type();

            if file_type.is_file() {
                let metadata = entry.metadata()?;
                entries.push(Entry::File {
                    path,
                    size: metadata.len(),
                });
            } else if file_type.is_dir() {
                entries.push(Entry::Directory { path });
            } else {
                // Symlink or other special file: omitted, never an error
                trace!(path = %path.display(), "Skipping non-regular entry");
            }
        }

        entries.sort_by(|a, b| a.path().cmp(b.path()));

        Ok(entries)
    }
}
