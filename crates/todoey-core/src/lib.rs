//! Todoey Core - record shapes, rules and query configuration
//!
//! This crate provides the storage-independent half of the to-do store:
//! - Category and Item models with id generation and default values
//! - Required-field and configurable uniqueness validation
//! - Filter/sort configuration and case/diacritic-insensitive text folding
//! - The error taxonomy and structured logging facility shared by all crates

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod query;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, TodoeyError};
pub use model::{Category, CategoryDraft, CategoryId, Item, ItemDraft, ItemId};
pub use query::{CategoryQuery, ItemQuery};
pub use rules::{DeletePolicy, ValidationRules};
