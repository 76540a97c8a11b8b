//! Flat list store
//!
//! The category-less variant: one JSON file holding an ordered list of
//! `{title, done}` records. It never shares a file with the hierarchical
//! store; the document carries its own schema mode tag.

mod atomic;
mod list_store;

pub use list_store::{FlatItem, FlatListStore, FLAT_MODE};
