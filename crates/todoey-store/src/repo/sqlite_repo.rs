//! SQLite repository implementation
//!
//! Raw row access for categories and items. Callers map `rusqlite::Error`
//! onto the read or write side of the error taxonomy.

use crate::db::FOLD_FN;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use todoey_core::model::{Category, CategoryId, Item, ItemId};
use todoey_core::query::{CategoryQuery, ItemQuery};

const CATEGORY_COLUMNS: &str = "id, name, created_at";
const ITEM_COLUMNS: &str = "id, parent_category_id, title, done, created_at, updated_at";

/// SQLite repository for Categories and Items
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a new Category row
    pub fn insert_category(conn: &Connection, category: &Category) -> rusqlite::Result<()> {
        conn.execute(
            "INSERT INTO categories (id, name, created_at) VALUES (?1, ?2, ?3)",
            params![
                category.id.as_str(),
                category.name,
                category.created_at.timestamp_millis(),
            ],
        )?;
        Ok(())
    }

    /// Insert a new Item row
    pub fn insert_item(conn: &Connection, item: &Item) -> rusqlite::Result<()> {
        conn.execute(
            "INSERT INTO items (id, parent_category_id, title, done, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                item.id.as_str(),
                item.parent_category_id.as_str(),
                item.title,
                item.done,
                item.created_at.timestamp_millis(),
                item.updated_at.timestamp_millis(),
            ],
        )?;
        Ok(())
    }

    /// Write the mutable fields of an Item; returns the number of rows touched
    pub fn update_item(conn: &Connection, item: &Item) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE items SET done = ?2, updated_at = ?3 WHERE id = ?1",
            params![
                item.id.as_str(),
                item.done,
                item.updated_at.timestamp_millis(),
            ],
        )
    }

    /// Delete one Item; returns the number of rows removed
    pub fn delete_item(conn: &Connection, item_id: &ItemId) -> rusqlite::Result<usize> {
        conn.execute("DELETE FROM items WHERE id = ?1", [item_id.as_str()])
    }

    /// Delete every Item of a Category; returns the number of rows removed
    pub fn delete_items_of(conn: &Connection, category_id: &CategoryId) -> rusqlite::Result<usize> {
        conn.execute(
            "DELETE FROM items WHERE parent_category_id = ?1",
            [category_id.as_str()],
        )
    }

    /// Delete one Category row; returns the number of rows removed
    pub fn delete_category(conn: &Connection, category_id: &CategoryId) -> rusqlite::Result<usize> {
        conn.execute(
            "DELETE FROM categories WHERE id = ?1",
            [category_id.as_str()],
        )
    }

    /// Get a Category by ID
    pub fn get_category(
        conn: &Connection,
        category_id: &CategoryId,
    ) -> rusqlite::Result<Option<Category>> {
        conn.query_row(
            &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1"),
            [category_id.as_str()],
            category_from_row,
        )
        .optional()
    }

    /// Get an Item by ID
    pub fn get_item(conn: &Connection, item_id: &ItemId) -> rusqlite::Result<Option<Item>> {
        conn.query_row(
            &format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1"),
            [item_id.as_str()],
            item_from_row,
        )
        .optional()
    }

    /// Check whether a Category row exists
    pub fn category_exists(conn: &Connection, category_id: &CategoryId) -> rusqlite::Result<bool> {
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)",
            [category_id.as_str()],
            |row| row.get(0),
        )
    }

    /// Count the Items owned by a Category
    pub fn count_items(conn: &Connection, category_id: &CategoryId) -> rusqlite::Result<usize> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM items WHERE parent_category_id = ?1",
            [category_id.as_str()],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Fetch Categories matching a query, insertion order unless sorted
    pub fn fetch_categories(
        conn: &Connection,
        query: &CategoryQuery,
    ) -> rusqlite::Result<Vec<Category>> {
        let mut sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories");
        let mut args: Vec<String> = Vec::new();

        if let Some(needle) = query.folded_substring() {
            args.push(needle);
            sql.push_str(&format!(" WHERE instr({FOLD_FN}(name), ?{}) > 0", args.len()));
        }

        if query.sort_by_name_ascending {
            sql.push_str(&format!(" ORDER BY {FOLD_FN}(name) ASC, seq ASC"));
        } else {
            sql.push_str(" ORDER BY seq ASC");
        }

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), category_from_row)?;
        rows.collect()
    }

    /// Fetch Items matching a query
    ///
    /// The parent and title predicates are combined with AND; ordering is by
    /// folded title when requested, otherwise insertion order.
    pub fn fetch_items(conn: &Connection, query: &ItemQuery) -> rusqlite::Result<Vec<Item>> {
        let mut sql = format!("SELECT {ITEM_COLUMNS} FROM items");
        let mut clauses: Vec<String> = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if let Some(parent_id) = &query.parent_id {
            args.push(parent_id.as_str().to_string());
            clauses.push(format!("parent_category_id = ?{}", args.len()));
        }

        if let Some(needle) = query.folded_substring() {
            args.push(needle);
            clauses.push(format!("instr({FOLD_FN}(title), ?{}) > 0", args.len()));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if query.sort_by_title_ascending {
            sql.push_str(&format!(" ORDER BY {FOLD_FN}(title) ASC, seq ASC"));
        } else {
            sql.push_str(" ORDER BY seq ASC");
        }

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), item_from_row)?;
        rows.collect()
    }

    /// Read the schema mode recorded when the store was created
    pub fn schema_mode(conn: &Connection) -> rusqlite::Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM store_meta WHERE key = 'schema_mode'",
            [],
            |row| row.get(0),
        )
        .optional()
    }
}

fn timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let millis: i64 = row.get(idx)?;
    DateTime::from_timestamp_millis(millis)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, millis))
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category::from_parts(
        CategoryId::from_string(row.get::<_, String>(0)?),
        row.get(1)?,
        timestamp(row, 2)?,
    ))
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: ItemId::from_string(row.get::<_, String>(0)?),
        parent_category_id: CategoryId::from_string(row.get::<_, String>(1)?),
        title: row.get(2)?,
        done: row.get(3)?,
        created_at: timestamp(row, 4)?,
        updated_at: timestamp(row, 5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::migrations::apply_migrations;
    use todoey_core::model::{CategoryDraft, ItemDraft};

    fn setup() -> Connection {
        let mut conn = db::open_in_memory().unwrap();
        db::configure(&conn).unwrap();
        apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_and_get_category() {
        let conn = setup();
        let category = CategoryDraft::named("Home").into_category().unwrap();
        SqliteRepo::insert_category(&conn, &category).unwrap();

        let loaded = SqliteRepo::get_category(&conn, &category.id).unwrap();
        assert_eq!(loaded, Some(category));
    }

    #[test]
    fn test_item_without_category_violates_foreign_key() {
        let conn = setup();
        let item = ItemDraft::new(CategoryId::from("nope"), "Orphan")
            .into_item()
            .unwrap();

        assert!(SqliteRepo::insert_item(&conn, &item).is_err());
    }

    #[test]
    fn test_fetch_items_insertion_order() {
        let conn = setup();
        let category = CategoryDraft::named("Home").into_category().unwrap();
        SqliteRepo::insert_category(&conn, &category).unwrap();

        for title in ["zebra", "apple", "mango"] {
            let item = ItemDraft::new(category.id.clone(), title).into_item().unwrap();
            SqliteRepo::insert_item(&conn, &item).unwrap();
        }

        let titles: Vec<String> =
            SqliteRepo::fetch_items(&conn, &ItemQuery::for_category(category.id.clone()))
                .unwrap()
                .into_iter()
                .map(|i| i.title)
                .collect();
        assert_eq!(titles, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_schema_mode_recorded() {
        let conn = setup();
        assert_eq!(
            SqliteRepo::schema_mode(&conn).unwrap().as_deref(),
            Some("hierarchical")
        );
    }
}
