//! Root path resolution

use crate::error::SnapshotError;
use std::path::{Path, PathBuf};

/// Resolve a snapshot root to an absolute, canonical directory path.
///
/// Fails before any traversal starts if the path does not exist or is not a
/// directory, so a bad root can never touch the output file.
pub fn resolve_root(path: &Path) -> Result<PathBuf, SnapshotError> {
    // dunce for cross-platform canonicalization (avoids \\?\ paths on Windows)
    let canonical = match dunce::canonicalize(path) {
        Ok(p) => p,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SnapshotError::RootNotFound(path.to_path_buf()))
        }
        Err(e) => {
            return Err(SnapshotError::InvalidPath(format!(
                "Failed to canonicalize {:?}: {}",
                path, e
            )))
        }
    };

    if !canonical.is_dir() {
        return Err(SnapshotError::NotADirectory(canonical));
    }

    Ok(canonical)
}
