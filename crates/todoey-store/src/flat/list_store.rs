use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use todoey_core::errors::TodoeyError;
use todoey_core::query::fold_text;
use tracing::debug;

use super::atomic::atomic_write;
use crate::errors::{storage_unavailable, Result};

/// Schema mode tag written into every flat document
pub const FLAT_MODE: &str = "flat";

/// One entry of the flat list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Serialize, Deserialize)]
struct FlatDocument {
    schema_mode: String,
    items: Vec<FlatItem>,
}

/// File-backed ordered list without categories
///
/// Each mutation rewrites the whole file atomically. If the write fails
/// the in-memory list is left as it was, so memory and disk never diverge.
#[derive(Debug)]
pub struct FlatListStore {
    path: PathBuf,
    items: Vec<FlatItem>,
}

impl FlatListStore {
    /// Load the list at `path`; a missing file is an empty list
    ///
    /// # Errors
    /// * `StorageUnavailable` - the file exists but cannot be read or parsed
    /// * `SchemaMismatch` - the document belongs to another schema mode
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let location = path.display().to_string();

        let items = match fs::read(&path) {
            Ok(bytes) => {
                let doc: FlatDocument = serde_json::from_slice(&bytes)
                    .map_err(|e| storage_unavailable(&location, e))?;
                if doc.schema_mode != FLAT_MODE {
                    return Err(TodoeyError::SchemaMismatch {
                        expected: FLAT_MODE.to_string(),
                        found: doc.schema_mode,
                    });
                }
                doc.items
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(storage_unavailable(&location, e)),
        };

        debug!(location = %location, item_count = items.len(), "flat list opened");
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, in insertion order
    pub fn items(&self) -> &[FlatItem] {
        &self.items
    }

    /// Append a new, not-done entry
    ///
    /// # Errors
    /// * `WriteFailed` - the file could not be written; nothing changes
    pub fn add(&mut self, title: impl Into<String>) -> Result<FlatItem> {
        let item = FlatItem {
            title: title.into(),
            done: false,
        };
        let mut next = self.items.clone();
        next.push(item.clone());
        self.commit(next)?;
        Ok(item)
    }

    /// Flip `done` on the entry at `index`
    ///
    /// # Errors
    /// * `ItemNotFound` - `index` is out of range
    /// * `WriteFailed` - the file could not be written; nothing changes
    pub fn toggle_done(&mut self, index: usize) -> Result<FlatItem> {
        let mut next = self.items.clone();
        let entry = next.get_mut(index).ok_or_else(|| not_found(index))?;
        entry.done = !entry.done;
        let toggled = entry.clone();
        self.commit(next)?;
        Ok(toggled)
    }

    /// Remove the entry at `index`
    ///
    /// # Errors
    /// * `ItemNotFound` - `index` is out of range
    /// * `WriteFailed` - the file could not be written; nothing changes
    pub fn delete(&mut self, index: usize) -> Result<FlatItem> {
        if index >= self.items.len() {
            return Err(not_found(index));
        }
        let mut next = self.items.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    /// Entries whose title contains `substring`, ignoring case and accents
    ///
    /// Returns each hit with its index. A blank substring returns everything.
    pub fn search(&self, substring: &str) -> Vec<(usize, FlatItem)> {
        let needle = fold_text(substring.trim());
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| needle.is_empty() || fold_text(&item.title).contains(&needle))
            .map(|(idx, item)| (idx, item.clone()))
            .collect()
    }

    fn commit(&mut self, next: Vec<FlatItem>) -> Result<()> {
        let doc = FlatDocument {
            schema_mode: FLAT_MODE.to_string(),
            items: next,
        };
        let bytes = serde_json::to_vec_pretty(&doc).map_err(|e| TodoeyError::WriteFailed {
            op: "encode_flat_list".to_string(),
            cause: e.to_string(),
        })?;
        atomic_write(&self.path, &bytes)?;
        self.items = doc.items;
        Ok(())
    }
}

fn not_found(index: usize) -> TodoeyError {
    TodoeyError::ItemNotFound {
        item_id: format!("#{index}"),
    }
}
