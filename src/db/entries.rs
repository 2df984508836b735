//! Entry CRUD operations.
//!
//! This module provides the SQL for reading and writing journal entries. The
//! functions here return raw `AppError::Database` errors; the read/write failure
//! policy is applied one layer up in [`crate::store::EntryStore`].

use crate::constants::DATE_FORMAT_ISO;
use crate::dates;
use crate::errors::{AppResult, DatabaseError};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use tracing::debug;

const ENTRY_COLUMNS: &str = "id, date, mood, highlight, created_at";

/// Represents one day's journal entry in the database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,
    pub mood: Option<i64>,
    pub highlight: Option<String>,
    /// Time of the most recent write, not of the first one.
    pub created_at: String,
}

impl Entry {
    /// Whether the entry carries a non-empty highlight.
    pub fn has_highlight(&self) -> bool {
        self.highlight.as_deref().is_some_and(|h| !h.is_empty())
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let date_str: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT_ISO).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Entry {
        id: row.get(0)?,
        date,
        mood: row.get(2)?,
        highlight: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Inserts the entry for `date` or overwrites the existing one.
///
/// `mood`, `highlight` and `created_at` are replaced wholesale: passing `None`
/// clears a previously stored value. The row keeps its `id` on update.
/// Returns the entry ID.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `date` - Calendar day of the entry
/// * `mood` - Mood value, if any
/// * `highlight` - The day's highlight text, if any
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn upsert_entry(
    conn: &Connection,
    date: NaiveDate,
    mood: Option<i64>,
    highlight: Option<&str>,
) -> AppResult<i64> {
    debug!("Upserting entry for date {}", date);

    let date_key = dates::date_key(date);

    conn.execute(
        r#"
        INSERT INTO entries (date, mood, highlight, created_at)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(date) DO UPDATE SET
            mood = excluded.mood,
            highlight = excluded.highlight,
            created_at = excluded.created_at
        "#,
        params![date_key, mood, highlight, dates::iso_timestamp()],
    )
    .map_err(DatabaseError::Sqlite)?;

    let entry_id: i64 = conn
        .query_row(
            "SELECT id FROM entries WHERE date = ?1",
            params![date_key],
            |row| row.get(0),
        )
        .map_err(DatabaseError::Sqlite)?;

    debug!("Entry upserted with id {}", entry_id);
    Ok(entry_id)
}

/// Retrieves an entry by date.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry exists for the given date.
pub fn get_entry_by_date(conn: &Connection, date: NaiveDate) -> AppResult<Option<Entry>> {
    debug!("Getting entry for date {}", date);

    let entry = conn
        .query_row(
            &format!("SELECT {} FROM entries WHERE date = ?1", ENTRY_COLUMNS),
            params![dates::date_key(date)],
            entry_from_row,
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    Ok(entry)
}

/// Retrieves every entry, most recent date first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn get_all_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    debug!("Getting all entries");

    query_entries(
        conn,
        &format!("SELECT {} FROM entries ORDER BY date DESC", ENTRY_COLUMNS),
    )
}

/// Retrieves entries whose highlight is neither NULL nor empty, most recent date first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn get_entries_with_highlights(conn: &Connection) -> AppResult<Vec<Entry>> {
    debug!("Getting entries with highlights");

    query_entries(
        conn,
        &format!(
            "SELECT {} FROM entries WHERE highlight IS NOT NULL AND highlight != '' ORDER BY date DESC",
            ENTRY_COLUMNS
        ),
    )
}

fn query_entries(conn: &Connection, sql: &str) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(sql).map_err(DatabaseError::Sqlite)?;
    let entries = stmt
        .query_map([], entry_from_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    debug!("Query returned {} entries", entries.len());
    Ok(entries)
}

/// Deletes every entry. Returns the number of rows removed.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_all_entries(conn: &Connection) -> AppResult<usize> {
    debug!("Deleting all entries");

    let removed = conn
        .execute("DELETE FROM entries", [])
        .map_err(DatabaseError::Sqlite)?;

    Ok(removed)
}
