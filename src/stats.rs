//! Streak and count statistics over the full entry set.
//!
//! Everything here is a pure function of a slice of entries and the date that
//! counts as "today". Nothing is cached; callers recompute on every view. A
//! streak is defined by an entry *existing* for a day, whatever its mood or
//! highlight.

use crate::constants::WEEK_WINDOW_DAYS;
use crate::db::entries::Entry;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate statistics derived from all entries.
///
/// `Default` is the all-zero value shown for an empty store or when the
/// computation could not run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakStats {
    /// Consecutive days with an entry, ending today. Zero if today has no entry.
    pub current_streak: u32,
    /// Longest run of consecutive days with an entry, anywhere in the history.
    pub longest_streak: u32,
    pub total_entries: u32,
    /// Entries dated on or after seven days before today.
    pub this_week_count: u32,
    /// Entries dated on or after the first of the current month.
    pub this_month_count: u32,
}

/// Computes all statistics. `entries` may be in any order.
///
/// # Examples
///
/// ```
/// use smallwins::stats;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
/// let stats = stats::compute(&[], today);
/// assert_eq!(stats, stats::StreakStats::default());
/// ```
pub fn compute(entries: &[Entry], today: NaiveDate) -> StreakStats {
    if entries.is_empty() {
        return StreakStats::default();
    }

    let dates = sorted_dates(entries);
    let week_start = today - Duration::days(WEEK_WINDOW_DAYS);
    let month_start = today.with_day(1).unwrap_or(today);

    StreakStats {
        current_streak: current_streak(&dates, today),
        longest_streak: longest_streak(&dates),
        total_entries: count(entries.len()),
        this_week_count: count(entries.iter().filter(|e| e.date >= week_start).count()),
        this_month_count: count(entries.iter().filter(|e| e.date >= month_start).count()),
    }
}

/// Number of entries per stored mood value. Entries without a mood are skipped.
pub fn mood_counts(entries: &[Entry]) -> BTreeMap<i64, u32> {
    let mut counts = BTreeMap::new();
    for mood in entries.iter().filter_map(|e| e.mood) {
        *counts.entry(mood).or_insert(0) += 1;
    }
    counts
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Distinct entry dates, ascending.
fn sorted_dates(entries: &[Entry]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Walks backward from today over ascending `dates`, one calendar day at a time.
///
/// Dates after today are passed over. The walk stops at the first date earlier
/// than the day it expects.
fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut expected = today;

    for &date in dates.iter().rev() {
        if date == expected {
            streak += 1;
            match expected.pred_opt() {
                Some(prev) => expected = prev,
                None => break,
            }
        } else if date < expected {
            break;
        }
    }

    streak
}

/// Longest run of consecutive days in ascending `dates`.
fn longest_streak(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
        } else {
            run = 1;
        }
        longest = longest.max(run);
    }

    longest
}
