//! Database connection management
//!
//! Opens SQLite connections and applies the settings every store relies on

use crate::errors::{storage_unavailable, Result};
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use std::path::Path;
use todoey_core::query::fold_text;

/// Name of the SQL scalar function wrapping `fold_text`
pub const FOLD_FN: &str = "todoey_fold";

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    Connection::open(path).map_err(|e| storage_unavailable(&path.display().to_string(), e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| storage_unavailable(":memory:", e))
}

/// Configure a connection: integrity, durability and the fold function
pub fn configure(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", true)?;

    // journal_mode answers with the resulting mode ("memory" for in-memory dbs)
    let _mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

    conn.pragma_update(None, "synchronous", "FULL")?;

    register_fold_function(conn)
}

/// Register `todoey_fold(text)` so filtering and sorting run in SQL
fn register_fold_function(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        FOLD_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: String = ctx.get(0)?;
            Ok(fold_text(&text))
        },
    )
}
