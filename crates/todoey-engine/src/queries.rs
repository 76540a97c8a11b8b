//! Read paths
//!
//! Item listings are always scoped to one Category. A stale Category id is
//! reported as `CategoryNotFound` rather than as an empty list.

use todoey_core::errors::{Result, TodoeyError};
use todoey_core::model::{Category, CategoryId, Item};
use todoey_core::query::{CategoryQuery, ItemQuery};
use todoey_store::StorageEngine;

/// All Categories in insertion order
///
/// # Errors
/// * `QueryFailed` - on storage read errors
pub fn list_categories(engine: &StorageEngine) -> Result<Vec<Category>> {
    engine.fetch_categories(&CategoryQuery::all())
}

/// Items of one Category in insertion order, optionally filtered by title
///
/// A blank `title_filter` means no filter.
///
/// # Errors
/// * `CategoryNotFound` - `category_id` does not exist
/// * `QueryFailed` - on storage read errors
pub fn list_items(
    engine: &StorageEngine,
    category_id: &CategoryId,
    title_filter: Option<&str>,
) -> Result<Vec<Item>> {
    let mut query = ItemQuery::for_category(category_id.clone());
    if let Some(filter) = title_filter {
        query = query.with_title_filter(filter);
    }
    list_items_with(engine, &query)
}

/// Items matching an explicit filter/sort configuration
///
/// # Errors
/// * `ValidationError` - the query names no parent Category
/// * `CategoryNotFound` - the parent Category does not exist
/// * `QueryFailed` - on storage read errors
pub fn list_items_with(engine: &StorageEngine, query: &ItemQuery) -> Result<Vec<Item>> {
    let parent_id = query.parent_id.as_ref().ok_or_else(|| {
        TodoeyError::validation("parent_id", "Item queries must name a parent category")
    })?;

    if engine.get_category(parent_id)?.is_none() {
        return Err(TodoeyError::CategoryNotFound {
            category_id: parent_id.to_string(),
        });
    }

    engine.fetch_items(query)
}
