use crate::model::{Category, CategoryId, Item};

use super::text::fold_text;

/// Filter and sort configuration for an Item fetch
///
/// A `title_substring` is always combined with `parent_id` by logical AND;
/// blank substrings are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
    pub parent_id: Option<CategoryId>,
    pub title_substring: Option<String>,
    pub sort_by_title_ascending: bool,
}

impl ItemQuery {
    /// Items of one Category, in insertion order
    pub fn for_category(parent_id: CategoryId) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Default::default()
        }
    }

    /// Add a title substring predicate
    pub fn with_title_filter(mut self, substring: impl Into<String>) -> Self {
        self.title_substring = Some(substring.into());
        self
    }

    /// Order by folded title instead of insertion order
    pub fn sorted_by_title(mut self) -> Self {
        self.sort_by_title_ascending = true;
        self
    }

    /// The folded needle, or `None` when no usable filter is set
    pub fn folded_substring(&self) -> Option<String> {
        self.title_substring
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(fold_text)
    }

    /// Evaluate the predicate conjunction against one Item
    pub fn matches(&self, item: &Item) -> bool {
        let parent_ok = self
            .parent_id
            .as_ref()
            .map_or(true, |p| &item.parent_category_id == p);
        let title_ok = self
            .folded_substring()
            .map_or(true, |needle| fold_text(&item.title).contains(&needle));
        parent_ok && title_ok
    }

    /// Filter and order an insertion-ordered slice the way the store would
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        let mut out: Vec<Item> = items.iter().filter(|i| self.matches(i)).cloned().collect();
        if self.sort_by_title_ascending {
            // stable sort keeps insertion order among equal titles
            out.sort_by_cached_key(|i| fold_text(&i.title));
        }
        out
    }
}

/// Filter and sort configuration for a Category fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryQuery {
    pub name_substring: Option<String>,
    pub sort_by_name_ascending: bool,
}

impl CategoryQuery {
    /// Every Category, in insertion order
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_name_filter(mut self, substring: impl Into<String>) -> Self {
        self.name_substring = Some(substring.into());
        self
    }

    pub fn folded_substring(&self) -> Option<String> {
        self.name_substring
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(fold_text)
    }

    pub fn matches(&self, category: &Category) -> bool {
        self.folded_substring()
            .map_or(true, |needle| fold_text(&category.name).contains(&needle))
    }
}
