//! Filter and sort configuration plus the text folding both stores share

pub mod filter;
pub mod text;

pub use filter::{CategoryQuery, ItemQuery};
pub use text::{contains_folded, fold_text};
