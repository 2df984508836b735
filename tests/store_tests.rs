//! Integration tests for the entry store and the statistics computed from it.
//!
//! These run against a real SQLite file in a temporary directory and exercise
//! the store the way the application does: through `EntryStore` only.

use chrono::{Duration, NaiveDate};
use smallwins::errors::{AppError, DatabaseError};
use smallwins::stats::StreakStats;
use smallwins::EntryStore;
use std::fs;
use std::time::Instant;
use tempfile::TempDir;

fn open_store() -> (TempDir, EntryStore) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let store = EntryStore::open(&temp_dir.path().join("smallwins.db")).expect("open store");
    (temp_dir, store)
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_one_entry_per_date_after_repeated_upserts() {
    let (_dir, store) = open_store();
    let date = day(2024, 6, 1);

    for mood in 1..=5 {
        store.upsert(date, Some(mood), Some("again")).unwrap();
    }

    let all = store.get_all();
    assert_eq!(all.iter().filter(|e| e.date == date).count(), 1);
    assert_eq!(store.get_by_date(date).unwrap().mood, Some(5));
}

#[test]
fn test_upsert_replaces_all_fields() {
    let (_dir, store) = open_store();
    let date = day(2024, 6, 1);

    let id = store.upsert(date, Some(3), Some("first")).unwrap();
    let before = store.get_by_date(date).unwrap();

    let same_id = store.upsert(date, None, None).unwrap();
    let after = store.get_by_date(date).unwrap();

    assert_eq!(id, same_id);
    assert_eq!(after.id, before.id);
    assert_eq!(after.mood, None);
    assert_eq!(after.highlight, None);
    assert!(after.created_at >= before.created_at);
}

#[test]
fn test_get_all_is_descending_by_date() {
    let (_dir, store) = open_store();
    for date in [day(2024, 1, 15), day(2023, 12, 31), day(2024, 3, 2), day(2024, 1, 16)] {
        store.upsert(date, Some(1), None).unwrap();
    }

    let all = store.get_all();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|pair| pair[0].date >= pair[1].date));
}

#[test]
fn test_highlights_are_a_filtered_subset() {
    let (_dir, store) = open_store();
    store.upsert(day(2024, 6, 1), Some(1), Some("one")).unwrap();
    store.upsert(day(2024, 6, 2), Some(2), Some("")).unwrap();
    store.upsert(day(2024, 6, 3), Some(3), None).unwrap();
    store.upsert(day(2024, 6, 4), None, Some("four")).unwrap();

    let all = store.get_all();
    let highlights = store.get_with_highlights();

    assert_eq!(highlights.len(), 2);
    for entry in &highlights {
        assert!(entry.has_highlight());
        assert!(all.contains(entry));
    }
    assert_eq!(highlights[0].date, day(2024, 6, 4));
    assert_eq!(highlights[1].date, day(2024, 6, 1));
}

#[test]
fn test_get_by_date_absent_is_none() {
    let (_dir, store) = open_store();
    assert!(store.get_by_date(day(2024, 6, 1)).is_none());
}

#[test]
fn test_streak_perfect_run() {
    let (_dir, store) = open_store();
    let today = day(2024, 6, 20);
    for offset in 0..6 {
        store
            .upsert(today - Duration::days(offset), Some(1), None)
            .unwrap();
    }

    assert_eq!(store.compute_stats_on(today).current_streak, 6);
}

#[test]
fn test_streak_gap_breaks_it() {
    let (_dir, store) = open_store();
    let today = day(2024, 6, 20);
    store.upsert(today, Some(1), None).unwrap();
    store.upsert(day(2024, 6, 19), Some(1), None).unwrap();
    store.upsert(day(2024, 6, 15), Some(1), None).unwrap();

    assert_eq!(store.compute_stats_on(today).current_streak, 2);
}

#[test]
fn test_streak_without_entry_today() {
    let (_dir, store) = open_store();
    let today = day(2024, 6, 20);
    store.upsert(day(2024, 6, 19), Some(1), None).unwrap();
    store.upsert(day(2024, 6, 18), Some(1), None).unwrap();

    assert_eq!(store.compute_stats_on(today).current_streak, 0);
}

#[test]
fn test_longest_streak_with_isolated_day() {
    let (_dir, store) = open_store();
    for d in [1, 2, 3, 10] {
        store.upsert(day(2024, 5, d), Some(1), None).unwrap();
    }

    assert_eq!(store.compute_stats_on(day(2024, 6, 20)).longest_streak, 3);
}

#[test]
fn test_empty_store_stats_are_zero() {
    let (_dir, store) = open_store();
    assert_eq!(store.compute_stats(), StreakStats::default());
}

#[test]
fn test_two_day_scenario() {
    let (_dir, store) = open_store();
    let today = day(2024, 6, 2);
    store.upsert(day(2024, 6, 1), Some(3), Some("A")).unwrap();
    store.upsert(day(2024, 6, 2), Some(5), None).unwrap();

    let all = store.get_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].date, day(2024, 6, 2));
    assert_eq!(all[0].mood, Some(5));
    assert_eq!(all[1].date, day(2024, 6, 1));
    assert_eq!(all[1].mood, Some(3));

    let highlights = store.get_with_highlights();
    assert_eq!(highlights.len(), 1);
    assert_eq!(highlights[0].date, day(2024, 6, 1));
    assert_eq!(highlights[0].highlight.as_deref(), Some("A"));

    let stats = store.compute_stats_on(today);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.this_week_count, 2);
    assert_eq!(stats.this_month_count, 2);
}

#[test]
fn test_delete_all_scenario() {
    let (_dir, store) = open_store();
    let today = day(2024, 6, 2);
    store.upsert(day(2024, 6, 1), Some(3), Some("A")).unwrap();
    store.upsert(today, Some(5), None).unwrap();

    assert_eq!(store.delete_all().unwrap(), 2);

    assert!(store.get_all().is_empty());
    assert_eq!(store.compute_stats_on(today), StreakStats::default());
}

#[test]
fn test_ids_keep_increasing_after_reset() {
    let (_dir, store) = open_store();
    let first = store.upsert(day(2024, 6, 1), Some(1), None).unwrap();
    store.delete_all().unwrap();
    let second = store.upsert(day(2024, 6, 1), Some(1), None).unwrap();

    assert!(second > first);
}

#[test]
fn test_store_reopens_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("smallwins.db");

    let store = EntryStore::open(&db_path).unwrap();
    store.upsert(day(2024, 6, 1), Some(4), Some("kept")).unwrap();
    store.close();

    let store = EntryStore::open(&db_path).unwrap();
    let entry = store.get_by_date(day(2024, 6, 1)).unwrap();
    assert_eq!(entry.mood, Some(4));
    assert_eq!(entry.highlight.as_deref(), Some("kept"));
}

#[test]
fn test_open_directory_is_storage_unavailable() {
    let temp_dir = TempDir::new().unwrap();

    let started = Instant::now();
    let result = EntryStore::open(temp_dir.path());

    assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
    assert!(
        started.elapsed() < std::time::Duration::from_secs(2),
        "opening a directory took {:?}",
        started.elapsed()
    );
}

#[test]
fn test_open_non_database_file_is_storage_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("smallwins.db");
    fs::write(&db_path, "this is a text file, not a database\n".repeat(64)).unwrap();

    let result = EntryStore::open(&db_path);

    assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
}

#[test]
fn test_open_with_uncreatable_parent_is_storage_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "a file where a directory should be").unwrap();

    let result = EntryStore::open(&blocker.join("sub").join("smallwins.db"));

    match result {
        Err(AppError::StorageUnavailable(DatabaseError::Io(_))) => {}
        Err(other) => panic!("Expected StorageUnavailable(Io), got {:?}", other),
        Ok(_) => panic!("Expected an error for an uncreatable directory"),
    }
}
