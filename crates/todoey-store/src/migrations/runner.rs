//! Migration runner
//!
//! Applies embedded migrations idempotently and verifies recorded checksums

use crate::errors::MigrationError;
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;
use rusqlite::{Connection, OptionalExtension};

/// Apply all pending migrations to the database
///
/// Already-applied migrations are skipped after their checksum is checked.
pub fn apply_migrations(conn: &mut Connection) -> Result<(), MigrationError> {
    create_schema_version_table(conn)?;

    for migration in get_migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<(), MigrationError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(
    conn: &mut Connection,
    migration_id: &str,
    sql: &str,
) -> Result<(), MigrationError> {
    let checksum = compute_checksum(sql);

    let recorded: Option<String> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?1",
            [migration_id],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(recorded) = recorded {
        if recorded != checksum {
            return Err(MigrationError::ChecksumMismatch {
                migration_id: migration_id.to_string(),
                expected: recorded,
                actual: checksum,
            });
        }
        return Ok(());
    }

    let tx = conn.transaction()?;

    tx.execute_batch(sql).map_err(|e| MigrationError::Failed {
        migration_id: migration_id.to_string(),
        reason: e.to_string(),
    })?;

    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration_id, chrono::Utc::now().timestamp(), checksum],
    )?;

    tx.commit()?;

    tracing::debug!(migration_id, "schema migration applied");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_migrations() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(apply_migrations(&mut conn).is_ok());
    }

    #[test]
    fn test_idempotency() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        assert!(apply_migrations(&mut conn).is_ok());

        let applied: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_tampered_checksum_detected() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        conn.execute(
            "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_initial_schema'",
            [],
        )
        .unwrap();

        let result = apply_migrations(&mut conn);
        assert!(matches!(
            result,
            Err(MigrationError::ChecksumMismatch { .. })
        ));
    }
}
