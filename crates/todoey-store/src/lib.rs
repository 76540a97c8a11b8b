//! Todoey Store - durable storage for the to-do model
//!
//! Provides:
//! - `StorageEngine`: SQLite-backed hierarchical store with atomic change-sets
//! - Embedded schema bootstrap with checksums
//! - `FlatListStore`: single-file JSON store for the flat list variant

pub mod changeset;
pub mod db;
pub mod engine;
pub mod errors;
pub mod flat;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use changeset::{Change, ChangeSet};
pub use engine::StorageEngine;
pub use errors::Result;
pub use flat::{FlatItem, FlatListStore};
