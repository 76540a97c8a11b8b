use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{now_millis, CategoryId};
use crate::errors::{Result, TodoeyError};

/// Category - a named list that owns zero or more Items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (UUID v7)
    pub id: CategoryId,

    /// User-supplied name, never empty
    pub name: String,

    /// Timestamp when this Category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Rebuild a Category from stored fields
    pub fn from_parts(id: CategoryId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}

/// Unvalidated input for a new Category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: Option<String>,
}

impl CategoryDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Validate required fields and mint a new Category
    ///
    /// # Errors
    /// * `ValidationError` - if the name is missing, empty or whitespace-only
    pub fn into_category(self) -> Result<Category> {
        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            return Err(TodoeyError::validation(
                "name",
                "Category name cannot be empty or whitespace-only",
            ));
        }

        Ok(Category {
            id: CategoryId::generate(),
            name,
            created_at: now_millis(),
        })
    }
}
