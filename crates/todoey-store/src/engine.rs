//! Storage engine: the single owner of the SQLite connection
//!
//! Reads go straight to the connection. Writes are staged in a `ChangeSet`
//! and committed by `save` inside one transaction, so either every change
//! lands or none does. The engine assumes a single writer and does no
//! locking of its own.

use std::fs;
use std::path::Path;

use rusqlite::Connection;
use todoey_core::errors::TodoeyError;
use todoey_core::model::{Category, CategoryId, Item, ItemId};
use todoey_core::query::{CategoryQuery, ItemQuery};
use todoey_core::rules::DeletePolicy;
use tracing::debug;

use crate::changeset::{Change, ChangeSet};
use crate::db;
use crate::errors::{from_rusqlite_read, from_rusqlite_write, storage_unavailable, Result};
use crate::migrations::apply_migrations;
use crate::repo::SqliteRepo;

/// Schema mode written by the bootstrap migration
pub const HIERARCHICAL_MODE: &str = "hierarchical";

/// Handle to an open hierarchical store
pub struct StorageEngine {
    conn: Connection,
    location: String,
}

impl std::fmt::Debug for StorageEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageEngine")
            .field("location", &self.location)
            .finish()
    }
}

impl StorageEngine {
    /// Open (or create) the store at `path`
    ///
    /// Parent directories are created as needed. The schema is bootstrapped
    /// on first open and verified on every later one.
    ///
    /// # Errors
    /// * `StorageUnavailable` - the file cannot be created, is not a SQLite
    ///   database, or its recorded schema checksum differs
    /// * `SchemaMismatch` - the database was created for another schema mode
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let location = path.display().to_string();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| storage_unavailable(&location, e))?;
        }

        let conn = db::open(path)?;
        Self::bootstrap(conn, location)
    }

    /// Open a throwaway in-memory store
    ///
    /// # Errors
    /// * `StorageUnavailable` - SQLite could not allocate the database
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Self::bootstrap(conn, ":memory:".to_string())
    }

    fn bootstrap(mut conn: Connection, location: String) -> Result<Self> {
        db::configure(&conn).map_err(|e| storage_unavailable(&location, e))?;
        apply_migrations(&mut conn).map_err(|e| storage_unavailable(&location, e))?;

        let mode = SqliteRepo::schema_mode(&conn).map_err(|e| storage_unavailable(&location, e))?;
        match mode.as_deref() {
            Some(HIERARCHICAL_MODE) => {}
            other => {
                return Err(TodoeyError::SchemaMismatch {
                    expected: HIERARCHICAL_MODE.to_string(),
                    found: other.unwrap_or("none").to_string(),
                })
            }
        }

        debug!(location = %location, "storage engine opened");
        Ok(Self { conn, location })
    }

    /// Where this store lives (a file path or `:memory:`)
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Fetch Categories matching `query`
    ///
    /// # Errors
    /// * `QueryFailed` - on any read error; no partial result is returned
    pub fn fetch_categories(&self, query: &CategoryQuery) -> Result<Vec<Category>> {
        SqliteRepo::fetch_categories(&self.conn, query)
            .map_err(|e| from_rusqlite_read("fetch_categories", e))
    }

    /// Fetch Items matching `query`
    ///
    /// # Errors
    /// * `QueryFailed` - on any read error; no partial result is returned
    pub fn fetch_items(&self, query: &ItemQuery) -> Result<Vec<Item>> {
        SqliteRepo::fetch_items(&self.conn, query).map_err(|e| from_rusqlite_read("fetch_items", e))
    }

    /// Look up one Category
    ///
    /// # Errors
    /// * `QueryFailed` - on read error
    pub fn get_category(&self, category_id: &CategoryId) -> Result<Option<Category>> {
        SqliteRepo::get_category(&self.conn, category_id)
            .map_err(|e| from_rusqlite_read("get_category", e))
    }

    /// Look up one Item
    ///
    /// # Errors
    /// * `QueryFailed` - on read error
    pub fn get_item(&self, item_id: &ItemId) -> Result<Option<Item>> {
        SqliteRepo::get_item(&self.conn, item_id).map_err(|e| from_rusqlite_read("get_item", e))
    }

    /// Number of Items owned by a Category
    ///
    /// # Errors
    /// * `QueryFailed` - on read error
    pub fn count_items(&self, category_id: &CategoryId) -> Result<usize> {
        SqliteRepo::count_items(&self.conn, category_id)
            .map_err(|e| from_rusqlite_read("count_items", e))
    }

    /// Commit a change-set atomically
    ///
    /// Referential checks run inside the transaction, against the state the
    /// write will actually see. On any error the transaction is rolled back
    /// and the change-set is dropped.
    ///
    /// # Errors
    /// * `WriteFailed` - the database rejected a statement or the commit
    /// * `ParentNotFound` - an inserted Item names a missing Category
    /// * `ItemNotFound` - an updated or deleted Item does not exist
    /// * `CategoryNotFound` - a deleted Category does not exist
    /// * `CategoryNotEmpty` - a Category with Items was deleted under `Reject`
    pub fn save(&mut self, changes: ChangeSet) -> Result<()> {
        if changes.is_empty() {
            return Ok(());
        }
        let change_count = changes.len();

        let tx = self
            .conn
            .transaction()
            .map_err(|e| from_rusqlite_write("begin", e))?;

        for change in changes.into_changes() {
            apply_change(&tx, change)?;
        }

        tx.commit().map_err(|e| from_rusqlite_write("commit", e))?;

        debug!(change_count, "change-set committed");
        Ok(())
    }

    /// Close the underlying connection
    ///
    /// # Errors
    /// * `WriteFailed` - SQLite could not finalize the connection
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| from_rusqlite_write("close", e))
    }
}

fn apply_change(conn: &Connection, change: Change) -> Result<()> {
    let op = change.op_name();
    let write_err = |e: rusqlite::Error| from_rusqlite_write(op, e);

    match change {
        Change::InsertCategory(category) => {
            SqliteRepo::insert_category(conn, &category).map_err(write_err)
        }
        Change::InsertItem(item) => {
            let parent = &item.parent_category_id;
            if !SqliteRepo::category_exists(conn, parent).map_err(write_err)? {
                return Err(TodoeyError::ParentNotFound {
                    category_id: parent.to_string(),
                });
            }
            SqliteRepo::insert_item(conn, &item).map_err(write_err)
        }
        Change::UpdateItem(item) => {
            if SqliteRepo::update_item(conn, &item).map_err(write_err)? == 0 {
                return Err(TodoeyError::ItemNotFound {
                    item_id: item.id.to_string(),
                });
            }
            Ok(())
        }
        Change::DeleteItem(item_id) => {
            if SqliteRepo::delete_item(conn, &item_id).map_err(write_err)? == 0 {
                return Err(TodoeyError::ItemNotFound {
                    item_id: item_id.to_string(),
                });
            }
            Ok(())
        }
        Change::DeleteCategory {
            category_id,
            policy,
        } => {
            if !SqliteRepo::category_exists(conn, &category_id).map_err(write_err)? {
                return Err(TodoeyError::CategoryNotFound {
                    category_id: category_id.to_string(),
                });
            }

            let item_count = SqliteRepo::count_items(conn, &category_id).map_err(write_err)?;
            if item_count > 0 {
                match policy {
                    DeletePolicy::Reject => {
                        return Err(TodoeyError::CategoryNotEmpty {
                            category_id: category_id.to_string(),
                            item_count,
                        })
                    }
                    DeletePolicy::Cascade => {
                        SqliteRepo::delete_items_of(conn, &category_id).map_err(write_err)?;
                    }
                }
            }

            SqliteRepo::delete_category(conn, &category_id).map_err(write_err)?;
            Ok(())
        }
    }
}
