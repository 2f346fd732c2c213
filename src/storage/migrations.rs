//! Database migrations.
//!
//! Each migration upgrades the schema by one version. The version is kept in
//! `PRAGMA user_version`.

use rusqlite::Connection;

use crate::error::PsySafeError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version. A new database reports 0.
pub fn get_version(conn: &Connection) -> Result<i32, PsySafeError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| PsySafeError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), PsySafeError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| PsySafeError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), PsySafeError> {
    let current = get_version(conn)?;

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
        tracing::debug!(version, "applied schema migration");
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), PsySafeError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(PsySafeError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the local key-value table.
fn migrate_v1(conn: &Connection) -> Result<(), PsySafeError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| PsySafeError::Database(format!("Migration v1 failed: {e}")))
}
