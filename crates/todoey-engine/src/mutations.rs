//! Write paths
//!
//! Each mutation builds a single-change `ChangeSet` and commits it through
//! `StorageEngine::save`, so referential checks run inside the write
//! transaction. When a call returns `Ok` the store already reflects it.

use todoey_core::errors::{Result, TodoeyError};
use todoey_core::model::{Category, CategoryDraft, CategoryId, Item, ItemDraft, ItemId};
use todoey_core::query::{CategoryQuery, ItemQuery};
use todoey_core::rules::{DeletePolicy, ValidationRules};
use todoey_store::{Change, ChangeSet, StorageEngine};
use tracing::debug;

/// Create a Category
///
/// # Errors
/// * `ValidationError` - blank name, or a duplicate when names must be unique
/// * `WriteFailed` - the insert did not commit
pub fn create_category(
    engine: &mut StorageEngine,
    rules: &ValidationRules,
    name: &str,
) -> Result<Category> {
    let category = CategoryDraft::named(name).into_category()?;

    if rules.unique_category_names {
        let existing = engine.fetch_categories(&CategoryQuery::all())?;
        rules.check_category_name(&category.name, &existing)?;
    }

    engine.save(ChangeSet::single(Change::InsertCategory(category.clone())))?;
    debug!(category_id = %category.id, "category created");
    Ok(category)
}

/// Create a not-done Item under `category_id`
///
/// # Errors
/// * `ParentNotFound` - the Category does not exist at write time
/// * `ValidationError` - blank parent id, or a duplicate title when titles
///   must be unique
/// * `WriteFailed` - the insert did not commit
pub fn create_item(
    engine: &mut StorageEngine,
    rules: &ValidationRules,
    category_id: &CategoryId,
    title: &str,
) -> Result<Item> {
    let item = ItemDraft::new(category_id.clone(), title).into_item()?;

    if rules.unique_item_titles {
        let siblings = engine.fetch_items(&ItemQuery::for_category(category_id.clone()))?;
        rules.check_item_title(&item.title, &siblings)?;
    }

    engine.save(ChangeSet::single(Change::InsertItem(item.clone())))?;
    debug!(item_id = %item.id, category_id = %category_id, "item created");
    Ok(item)
}

/// Flip `done` on an Item and return the updated record
///
/// # Errors
/// * `ItemNotFound` - the Item does not exist
/// * `WriteFailed` - the update did not commit
pub fn toggle_done(engine: &mut StorageEngine, item_id: &ItemId) -> Result<Item> {
    let current = engine
        .get_item(item_id)?
        .ok_or_else(|| TodoeyError::ItemNotFound {
            item_id: item_id.to_string(),
        })?;

    let toggled = current.toggled();
    engine.save(ChangeSet::single(Change::UpdateItem(toggled.clone())))?;
    debug!(item_id = %item_id, done = toggled.done, "item toggled");
    Ok(toggled)
}

/// Delete one Item
///
/// # Errors
/// * `ItemNotFound` - the Item does not exist
/// * `WriteFailed` - the delete did not commit
pub fn delete_item(engine: &mut StorageEngine, item_id: &ItemId) -> Result<()> {
    engine.save(ChangeSet::single(Change::DeleteItem(item_id.clone())))
}

/// Delete a Category under an explicit policy
///
/// # Errors
/// * `CategoryNotFound` - the Category does not exist
/// * `CategoryNotEmpty` - it owns Items and `policy` is `Reject`
/// * `WriteFailed` - the delete did not commit
pub fn delete_category(
    engine: &mut StorageEngine,
    category_id: &CategoryId,
    policy: DeletePolicy,
) -> Result<()> {
    engine.save(ChangeSet::single(Change::DeleteCategory {
        category_id: category_id.clone(),
        policy,
    }))
}
