//! Database schema definitions and initialization.
//!
//! The store holds a single fixed table. There is no versioning or migration
//! step; the DDL below is the whole schema.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::Connection;
use tracing::debug;

/// Creates the `entries` table and its date index.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call on every process start.
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating database tables");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT UNIQUE NOT NULL,
            mood INTEGER,
            highlight TEXT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_date ON entries(date);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    debug!("Database tables created successfully");
    Ok(())
}
