//! Seedfs: directory-tree snapshots for an in-browser virtual filesystem.
//!
//! Walks a root directory recursively and serializes it into a single nested
//! JSON document in which every structural key carries a reserved `$` marker.
//! The resulting document is embedded as static seed data by a virtual
//! filesystem runtime, which loads it as its initial directory hierarchy.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
