//! The entry store: the one handle the rest of the application uses for storage.
//!
//! `EntryStore` owns the pooled [`Database`] and applies the failure policy on
//! top of the raw queries in [`crate::db::entries`]:
//!
//! - opening and writing fail loudly (`StorageUnavailable`, `WriteFailed`);
//! - reads fail quietly, logging the error and returning an empty result;
//! - statistics fail quietly to [`StreakStats::default`].
//!
//! An empty dashboard is recoverable. A write the user believes was saved is not.

use crate::dates;
use crate::db::entries::{self, Entry};
use crate::db::Database;
use crate::errors::{AppError, AppResult};
use crate::stats::{self, StreakStats};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Handle to the journal's entry table.
///
/// Construct one at start-up with [`EntryStore::open`] (or [`EntryStore::init`]
/// around an existing [`Database`]) and pass it to whatever needs storage.
///
/// # Examples
///
/// ```no_run
/// use smallwins::store::EntryStore;
/// use smallwins::dates;
/// use std::path::Path;
///
/// let store = EntryStore::open(Path::new("/tmp/smallwins.db"))?;
/// store.upsert(dates::today(), Some(3), Some("Finished the book"))?;
/// let stats = store.compute_stats();
/// assert!(stats.current_streak >= 1);
/// # Ok::<(), smallwins::AppError>(())
/// ```
pub struct EntryStore {
    db: Database,
}

impl EntryStore {
    /// Opens the database file and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns `AppError::StorageUnavailable` if the directory cannot be created,
    /// the file cannot be opened as a database, or the schema cannot be created.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        let db = Database::open(db_path).map_err(AppError::into_storage_unavailable)?;
        Self::init(db)
    }

    /// Wraps an open database, creating the schema if it is absent.
    ///
    /// Safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns `AppError::StorageUnavailable` if the schema cannot be created.
    pub fn init(db: Database) -> AppResult<Self> {
        db.initialize_schema()
            .map_err(AppError::into_storage_unavailable)?;
        info!("Entry store ready");
        Ok(EntryStore { db })
    }

    /// Releases the connection pool.
    pub fn close(self) {
        debug!("Closing entry store");
        drop(self.db);
    }

    /// The entry for `date`, or `None` if there is none or the read failed.
    pub fn get_by_date(&self, date: NaiveDate) -> Option<Entry> {
        self.try_get_by_date(date).unwrap_or_else(|e| {
            warn!("Failed to read entry for {}: {}", date, e);
            None
        })
    }

    /// Inserts or fully overwrites the entry for `date`.
    ///
    /// This is the only write path. `None` for `mood` or `highlight` clears any
    /// stored value. Returns the entry ID, which stays the same across updates.
    ///
    /// # Errors
    ///
    /// Returns `AppError::WriteFailed` if the entry was not saved.
    pub fn upsert(
        &self,
        date: NaiveDate,
        mood: Option<i64>,
        highlight: Option<&str>,
    ) -> AppResult<i64> {
        let id = self
            .db
            .get_conn()
            .and_then(|conn| entries::upsert_entry(&conn, date, mood, highlight))
            .map_err(AppError::into_write_failure)?;

        info!("Entry saved for {}", date);
        Ok(id)
    }

    /// All entries, most recent date first. Empty if the read failed.
    pub fn get_all(&self) -> Vec<Entry> {
        self.try_get_all().unwrap_or_else(|e| {
            warn!("Failed to read entries: {}", e);
            Vec::new()
        })
    }

    /// Entries with a non-empty highlight, most recent date first. Empty if the
    /// read failed.
    pub fn get_with_highlights(&self) -> Vec<Entry> {
        self.try_get_with_highlights().unwrap_or_else(|e| {
            warn!("Failed to read highlights: {}", e);
            Vec::new()
        })
    }

    /// Irreversibly removes every entry. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::WriteFailed` if the reset did not happen.
    pub fn delete_all(&self) -> AppResult<usize> {
        let removed = self
            .db
            .get_conn()
            .and_then(|conn| entries::delete_all_entries(&conn))
            .map_err(AppError::into_write_failure)?;

        info!("All entries deleted ({} removed)", removed);
        Ok(removed)
    }

    /// Statistics as of today's local date. Never fails; see [`Self::compute_stats_on`].
    pub fn compute_stats(&self) -> StreakStats {
        self.compute_stats_on(dates::today())
    }

    /// Statistics as of `today`. All zeros if the entries could not be read.
    pub fn compute_stats_on(&self, today: NaiveDate) -> StreakStats {
        match self.try_get_all() {
            Ok(all) => stats::compute(&all, today),
            Err(e) => {
                warn!("Failed to compute statistics: {}", e);
                StreakStats::default()
            }
        }
    }

    /// Entry count per mood value. Empty if the entries could not be read.
    pub fn mood_counts(&self) -> BTreeMap<i64, u32> {
        stats::mood_counts(&self.get_all())
    }

    /// Like [`Self::get_by_date`], but reports the failure.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ReadFailed` if the read did not complete.
    pub fn try_get_by_date(&self, date: NaiveDate) -> AppResult<Option<Entry>> {
        self.db
            .get_conn()
            .and_then(|conn| entries::get_entry_by_date(&conn, date))
            .map_err(AppError::into_read_failure)
    }

    /// Like [`Self::get_all`], but reports the failure.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ReadFailed` if the read did not complete.
    pub fn try_get_all(&self) -> AppResult<Vec<Entry>> {
        self.db
            .get_conn()
            .and_then(|conn| entries::get_all_entries(&conn))
            .map_err(AppError::into_read_failure)
    }

    /// Like [`Self::get_with_highlights`], but reports the failure.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ReadFailed` if the read did not complete.
    pub fn try_get_with_highlights(&self) -> AppResult<Vec<Entry>> {
        self.db
            .get_conn()
            .and_then(|conn| entries::get_entries_with_highlights(&conn))
            .map_err(AppError::into_read_failure)
    }

    #[cfg(test)]
    pub(crate) fn database(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, EntryStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(&temp_dir.path().join("test.db")).unwrap();
        (temp_dir, store)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn break_table(store: &EntryStore) {
        let conn = store.database().get_conn().unwrap();
        conn.execute_batch("DROP TABLE entries").unwrap();
    }

    #[test]
    fn test_reads_degrade_to_empty_on_failure() {
        let (_dir, store) = open_store();
        store.upsert(day(2024, 6, 1), Some(1), Some("A")).unwrap();
        break_table(&store);

        assert!(store.get_all().is_empty());
        assert!(store.get_with_highlights().is_empty());
        assert!(store.get_by_date(day(2024, 6, 1)).is_none());
        assert!(store.mood_counts().is_empty());
    }

    #[test]
    fn test_try_reads_report_read_failed() {
        let (_dir, store) = open_store();
        break_table(&store);

        assert!(matches!(store.try_get_all(), Err(AppError::ReadFailed(_))));
        assert!(matches!(
            store.try_get_by_date(day(2024, 6, 1)),
            Err(AppError::ReadFailed(_))
        ));
        assert!(matches!(
            store.try_get_with_highlights(),
            Err(AppError::ReadFailed(_))
        ));
    }

    #[test]
    fn test_writes_fail_loudly() {
        let (_dir, store) = open_store();
        break_table(&store);

        assert!(matches!(
            store.upsert(day(2024, 6, 1), Some(1), None),
            Err(AppError::WriteFailed(_))
        ));
        assert!(matches!(store.delete_all(), Err(AppError::WriteFailed(_))));
    }

    #[test]
    fn test_stats_degrade_to_zero_on_failure() {
        let (_dir, store) = open_store();
        store.upsert(day(2024, 6, 1), Some(1), None).unwrap();
        break_table(&store);

        assert_eq!(store.compute_stats_on(day(2024, 6, 1)), StreakStats::default());
    }

    #[test]
    fn test_init_recreates_missing_table() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let store = EntryStore::open(&db_path).unwrap();
        break_table(&store);
        store.close();

        let store = EntryStore::init(Database::open(&db_path).unwrap()).unwrap();
        store.upsert(day(2024, 6, 1), None, None).unwrap();
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_compute_stats_uses_local_today() {
        let (_dir, store) = open_store();
        store.upsert(dates::today(), Some(1), None).unwrap();

        let stats = store.compute_stats();
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
