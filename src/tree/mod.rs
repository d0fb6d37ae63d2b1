//! Filesystem tree serialization
//!
//! Walks a directory tree and assembles it into one nested JSON document,
//! with directories as objects, files as string leaves, and every key
//! tagged with the reserved `$` marker.

pub mod builder;
pub mod path;
pub mod walker;
