//! `TodoService`: the handle collaborators hold
//!
//! ## Logging Ownership
//!
//! The service owns lifecycle logging for every operation:
//! - an `info_span!` carrying a fresh `request_id`
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal
//! details. Errors are logged and then returned, never swallowed.

use std::path::Path;
use std::time::Instant;

use todoey_core::errors::Result;
use todoey_core::model::{Category, CategoryId, Item, ItemId};
use todoey_core::query::ItemQuery;
use todoey_core::rules::DeletePolicy;
use todoey_core::{log_op_end, log_op_error, log_op_start};
use todoey_core_types::RequestId;
use todoey_store::StorageEngine;
use tracing::info_span;

use crate::config::EngineConfig;
use crate::{mutations, queries};

/// Hierarchical to-do store with configured rules
///
/// Owns its `StorageEngine` exclusively; there is no shared global handle.
/// Calls are synchronous and a single writer is assumed.
#[derive(Debug)]
pub struct TodoService {
    engine: StorageEngine,
    config: EngineConfig,
}

impl TodoService {
    /// Open (or create) the store at `path`
    ///
    /// # Errors
    /// * `StorageUnavailable` - the store cannot be opened or bootstrapped
    /// * `SchemaMismatch` - the file belongs to another schema mode
    pub fn open<P: AsRef<Path>>(path: P, config: EngineConfig) -> Result<Self> {
        let path = path.as_ref();
        let engine = instrumented("open", || StorageEngine::open(path))?;
        Ok(Self { engine, config })
    }

    /// Open a throwaway in-memory store
    ///
    /// # Errors
    /// * `StorageUnavailable` - SQLite could not allocate the database
    pub fn open_in_memory(config: EngineConfig) -> Result<Self> {
        let engine = instrumented("open", StorageEngine::open_in_memory)?;
        Ok(Self { engine, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Where the underlying store lives
    pub fn location(&self) -> &str {
        self.engine.location()
    }

    /// All Categories in insertion order
    ///
    /// # Errors
    /// * `QueryFailed` - on storage read errors
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        instrumented("list_categories", || queries::list_categories(&self.engine))
    }

    /// Items of one Category, optionally filtered by a title substring
    ///
    /// # Errors
    /// * `CategoryNotFound` - `category_id` does not exist
    /// * `QueryFailed` - on storage read errors
    pub fn list_items(
        &self,
        category_id: &CategoryId,
        title_filter: Option<&str>,
    ) -> Result<Vec<Item>> {
        instrumented("list_items", || {
            queries::list_items(&self.engine, category_id, title_filter)
        })
    }

    /// Items matching an explicit filter/sort configuration
    ///
    /// # Errors
    /// * `ValidationError` - the query names no parent Category
    /// * `CategoryNotFound` - the parent Category does not exist
    /// * `QueryFailed` - on storage read errors
    pub fn list_items_with(&self, query: &ItemQuery) -> Result<Vec<Item>> {
        instrumented("list_items", || queries::list_items_with(&self.engine, query))
    }

    /// # Errors
    /// * `ValidationError` - blank name, or a duplicate when names must be unique
    /// * `WriteFailed` - the insert did not commit
    pub fn create_category(&mut self, name: &str) -> Result<Category> {
        let rules = self.config.validation;
        instrumented("create_category", || {
            mutations::create_category(&mut self.engine, &rules, name)
        })
    }

    /// # Errors
    /// * `ParentNotFound` - the Category does not exist
    /// * `ValidationError` - duplicate title when titles must be unique
    /// * `WriteFailed` - the insert did not commit
    pub fn create_item(&mut self, category_id: &CategoryId, title: &str) -> Result<Item> {
        let rules = self.config.validation;
        instrumented("create_item", || {
            mutations::create_item(&mut self.engine, &rules, category_id, title)
        })
    }

    /// # Errors
    /// * `ItemNotFound` - the Item does not exist
    /// * `WriteFailed` - the update did not commit
    pub fn toggle_done(&mut self, item_id: &ItemId) -> Result<Item> {
        instrumented("toggle_done", || {
            mutations::toggle_done(&mut self.engine, item_id)
        })
    }

    /// # Errors
    /// * `ItemNotFound` - the Item does not exist
    /// * `WriteFailed` - the delete did not commit
    pub fn delete_item(&mut self, item_id: &ItemId) -> Result<()> {
        instrumented("delete_item", || {
            mutations::delete_item(&mut self.engine, item_id)
        })
    }

    /// Delete a Category under the configured `delete_policy`
    ///
    /// # Errors
    /// * `CategoryNotFound` - the Category does not exist
    /// * `CategoryNotEmpty` - it owns Items and the policy is `Reject`
    /// * `WriteFailed` - the delete did not commit
    pub fn delete_category(&mut self, category_id: &CategoryId) -> Result<()> {
        let policy = self.config.delete_policy;
        self.delete_category_with(category_id, policy)
    }

    /// Delete a Category under an explicit policy
    ///
    /// # Errors
    /// * `CategoryNotFound` - the Category does not exist
    /// * `CategoryNotEmpty` - it owns Items and `policy` is `Reject`
    /// * `WriteFailed` - the delete did not commit
    pub fn delete_category_with(
        &mut self,
        category_id: &CategoryId,
        policy: DeletePolicy,
    ) -> Result<()> {
        instrumented("delete_category", || {
            mutations::delete_category(&mut self.engine, category_id, policy)
        })
    }

    /// Close the store
    ///
    /// # Errors
    /// * `WriteFailed` - SQLite could not finalize the connection
    pub fn close(self) -> Result<()> {
        let engine = self.engine;
        instrumented("close", || engine.close())
    }
}

fn instrumented<T>(op: &'static str, body: impl FnOnce() -> Result<T>) -> Result<T> {
    let request_id = RequestId::new();
    let span = info_span!("todoey_op", op, request_id = %request_id);
    let _guard = span.enter();

    log_op_start!(op);
    let start = Instant::now();

    match body() {
        Ok(value) => {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
            Ok(value)
        }
        Err(e) => {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}
