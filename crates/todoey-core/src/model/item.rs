use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{now_millis, CategoryId, ItemId};
use crate::errors::{Result, TodoeyError};

/// Item - a single to-do entry owned by exactly one Category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (UUID v7)
    pub id: ItemId,

    /// Owning Category
    pub parent_category_id: CategoryId,

    /// User-supplied title, may be empty
    pub title: String,

    /// Completion flag, the only mutable field
    pub done: bool,

    /// Timestamp when this Item was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last toggle
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Return a copy with `done` flipped and `updated_at` refreshed
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            updated_at: now_millis(),
            ..self.clone()
        }
    }
}

/// Unvalidated input for a new Item
///
/// `title` defaults to `""` and `done` to `false`; `parent_category_id` is
/// required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub parent_category_id: Option<CategoryId>,
    pub title: Option<String>,
    pub done: Option<bool>,
}

impl ItemDraft {
    pub fn new(parent_category_id: CategoryId, title: impl Into<String>) -> Self {
        Self {
            parent_category_id: Some(parent_category_id),
            title: Some(title.into()),
            done: None,
        }
    }

    /// Apply defaults, check required fields and mint a new Item
    ///
    /// # Errors
    /// * `ValidationError` - if `parent_category_id` is missing or blank
    pub fn into_item(self) -> Result<Item> {
        let parent_category_id = match self.parent_category_id {
            Some(id) if !id.as_str().trim().is_empty() => id,
            _ => {
                return Err(TodoeyError::validation(
                    "parent_category_id",
                    "Item requires a parent category",
                ))
            }
        };

        let now = now_millis();
        Ok(Item {
            id: ItemId::generate(),
            parent_category_id,
            title: self.title.unwrap_or_default(),
            done: self.done.unwrap_or(false),
            created_at: now,
            updated_at: now,
        })
    }
}
