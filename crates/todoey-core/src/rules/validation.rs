use serde::Deserialize;

use crate::errors::{Result, TodoeyError};
use crate::model::{Category, Item};
use crate::query::fold_text;

/// Uniqueness rules, both off by default
///
/// Names are compared after folding (case and diacritics ignored), so
/// "Café" and "cafe" collide when a rule is on. Item-title uniqueness is
/// scoped to the parent Category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationRules {
    pub unique_category_names: bool,
    pub unique_item_titles: bool,
}

impl ValidationRules {
    /// Check a candidate Category name against the existing Categories
    ///
    /// # Errors
    /// * `ValidationError` - if names must be unique and `name` is taken
    pub fn check_category_name(&self, name: &str, existing: &[Category]) -> Result<()> {
        if !self.unique_category_names {
            return Ok(());
        }
        let folded = fold_text(name);
        if existing.iter().any(|c| fold_text(&c.name) == folded) {
            return Err(TodoeyError::validation(
                "name",
                format!("A category named '{}' already exists", name),
            ));
        }
        Ok(())
    }

    /// Check a candidate Item title against the Items of the same Category
    ///
    /// # Errors
    /// * `ValidationError` - if titles must be unique and `title` is taken
    pub fn check_item_title(&self, title: &str, siblings: &[Item]) -> Result<()> {
        if !self.unique_item_titles {
            return Ok(());
        }
        let folded = fold_text(title);
        if siblings.iter().any(|i| fold_text(&i.title) == folded) {
            return Err(TodoeyError::validation(
                "title",
                format!("An item titled '{}' already exists in this category", title),
            ));
        }
        Ok(())
    }
}
