//! Test-data generator.
//!
//! Fills the journal with a run of consecutive days ending today, going only
//! through [`EntryStore::upsert`]. Output is deterministic so a seeded journal
//! always looks the same.

use crate::errors::{AppError, AppResult};
use crate::moods::Mood;
use crate::store::EntryStore;
use chrono::{Duration, NaiveDate};
use tracing::info;

const SAMPLE_HIGHLIGHTS: &[&str] = &[
    "Finished a chapter of my book",
    "Went for a long walk",
    "Called an old friend",
    "Cooked something new",
    "Got a full night of sleep",
    "Helped a coworker with a tricky bug",
    "Sat outside in the sun",
];

/// Writes `days` entries for the days ending at `today`. Returns how many were written.
///
/// Every third day has a mood but no highlight.
///
/// # Errors
///
/// Returns `AppError::InvalidDate` before writing anything if the run would
/// reach past the earliest representable date, and `AppError::WriteFailed` on
/// the first write that fails.
pub fn seed_entries(store: &EntryStore, today: NaiveDate, days: u32) -> AppResult<u32> {
    let days_back = |offset: u32| {
        today
            .checked_sub_signed(Duration::days(i64::from(offset)))
            .ok_or_else(|| AppError::InvalidDate(format!("{} minus {} days", today, offset)))
    };

    if let Some(last) = days.checked_sub(1) {
        days_back(last)?;
    }

    for offset in 0..days {
        let date = days_back(offset)?;
        let index = offset as usize;
        let mood = Mood::ALL[index % Mood::ALL.len()].value();
        let highlight = if offset % 3 == 2 {
            None
        } else {
            Some(SAMPLE_HIGHLIGHTS[index % SAMPLE_HIGHLIGHTS.len()])
        };

        store.upsert(date, Some(mood), highlight)?;
    }

    info!("Seeded {} entries ending {}", days, today);
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_seed_writes_consecutive_days() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(&temp_dir.path().join("test.db")).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();

        assert_eq!(seed_entries(&store, today, 14).unwrap(), 14);

        let stats = store.compute_stats_on(today);
        assert_eq!(stats.total_entries, 14);
        assert_eq!(stats.current_streak, 14);
        assert_eq!(stats.longest_streak, 14);

        // offsets 2, 5, 8, 11 carry no highlight
        assert_eq!(store.get_with_highlights().len(), 10);
    }

    #[test]
    fn test_seed_is_repeatable() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(&temp_dir.path().join("test.db")).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();

        seed_entries(&store, today, 5).unwrap();
        seed_entries(&store, today, 5).unwrap();

        assert_eq!(store.get_all().len(), 5);
    }

    #[test]
    fn test_seed_before_earliest_date_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(&temp_dir.path().join("test.db")).unwrap();
        let today = NaiveDate::MIN + Duration::days(1);

        let result = seed_entries(&store, today, 3);

        assert!(matches!(result, Err(AppError::InvalidDate(_))));
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_seed_zero_days() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(&temp_dir.path().join("test.db")).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();

        assert_eq!(seed_entries(&store, today, 0).unwrap(), 0);
        assert!(store.get_all().is_empty());
    }
}
