//! Record shapes for the hierarchical store

pub mod category;
pub mod ids;
pub mod item;

pub use category::{Category, CategoryDraft};
pub use ids::{CategoryId, ItemId};
pub use item::{Item, ItemDraft};

use chrono::{DateTime, Utc};

/// Current time truncated to millisecond precision
///
/// Records are persisted with millisecond timestamps; truncating at creation
/// keeps a freshly returned record equal to the one read back later.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
