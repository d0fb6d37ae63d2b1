//! Integration tests for the seed snapshot generator

mod snapshot_write;
