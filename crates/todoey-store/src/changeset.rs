//! Pending changes committed together by `StorageEngine::save`

use todoey_core::model::{Category, CategoryId, Item, ItemId};
use todoey_core::rules::DeletePolicy;

/// One pending create, update or delete
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    InsertCategory(Category),
    InsertItem(Item),
    /// Persist the mutable fields (`done`, `updated_at`) of an existing Item
    UpdateItem(Item),
    DeleteItem(ItemId),
    DeleteCategory {
        category_id: CategoryId,
        policy: DeletePolicy,
    },
}

impl Change {
    /// Short name used in logs and error context
    pub fn op_name(&self) -> &'static str {
        match self {
            Change::InsertCategory(_) => "insert_category",
            Change::InsertItem(_) => "insert_item",
            Change::UpdateItem(_) => "update_item",
            Change::DeleteItem(_) => "delete_item",
            Change::DeleteCategory { .. } => "delete_category",
        }
    }
}

/// An ordered batch of changes; applied all-or-nothing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A change-set holding exactly one change
    pub fn single(change: Change) -> Self {
        Self {
            changes: vec![change],
        }
    }

    pub fn push(&mut self, change: Change) -> &mut Self {
        self.changes.push(change);
        self
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub(crate) fn into_changes(self) -> Vec<Change> {
        self.changes
    }
}

impl FromIterator<Change> for ChangeSet {
    fn from_iter<T: IntoIterator<Item = Change>>(iter: T) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}
