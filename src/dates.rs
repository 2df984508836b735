//! Calendar date keys and timestamps.
//!
//! A date key is the `YYYY-MM-DD` rendering of a calendar day in the device's
//! **local** timezone. It is the uniqueness key of the entry table and the unit
//! of every streak computation, so it must only ever be derived here. Converting
//! the current instant to UTC first shifts the day near midnight in most
//! timezones.
//!
//! `created_at` timestamps are the one place UTC is used; they are never compared
//! against date keys.

use crate::constants::{DATE_FORMAT_COMPACT, DATE_FORMAT_DISPLAY, DATE_FORMAT_ISO};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeZone, Utc};
use tracing::debug;

/// Today's calendar date in the local timezone.
pub fn today() -> NaiveDate {
    local_date_of(&Local::now())
}

/// Today's date key, e.g. `2024-06-02`.
pub fn today_key() -> String {
    date_key(today())
}

/// Extracts the calendar date of an instant as seen in that instant's own timezone.
///
/// Takes the local year/month/day components directly; there is no UTC hop.
pub fn local_date_of<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Renders a date as its canonical key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT_ISO).to_string()
}

/// Parses a canonical `YYYY-MM-DD` key.
///
/// # Errors
///
/// Returns `AppError::InvalidDate` for anything that is not a real calendar date
/// in exactly that form.
pub fn parse_date_key(key: &str) -> AppResult<NaiveDate> {
    // chrono accepts unpadded fields; the stored key must be zero-padded
    if key.len() != 10 {
        return Err(AppError::InvalidDate(key.to_string()));
    }
    NaiveDate::parse_from_str(key, DATE_FORMAT_ISO)
        .map_err(|_| AppError::InvalidDate(key.to_string()))
}

/// Parses user input: either `YYYY-MM-DD` or the compact `YYYYMMDD` form.
///
/// # Errors
///
/// Returns `AppError::InvalidDate` when neither form matches.
pub fn parse_user_date(input: &str) -> AppResult<NaiveDate> {
    parse_date_key(input).or_else(|_| {
        if input.len() == 8 {
            NaiveDate::parse_from_str(input, DATE_FORMAT_COMPACT)
                .map_err(|_| AppError::InvalidDate(input.to_string()))
        } else {
            Err(AppError::InvalidDate(input.to_string()))
        }
    })
}

/// The current instant as an ISO-8601 UTC timestamp, e.g. `2024-06-02T21:04:05.123Z`.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Human-readable rendering of a date key, e.g. `Sun, Jun 2, 2024`.
///
/// The key is read as a plain calendar day, so no timezone can move it to the
/// neighbouring day. Keys that do not parse are returned unchanged.
pub fn display_date(key: &str) -> String {
    match parse_date_key(key) {
        Ok(date) => format_display(date),
        Err(_) => {
            debug!("Not a date key, displaying verbatim: {:?}", key);
            key.to_string()
        }
    }
}

/// Human-readable rendering of a calendar date.
pub fn format_display(date: NaiveDate) -> String {
    date.format(DATE_FORMAT_DISPLAY).to_string()
}
