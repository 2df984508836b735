use crate::constants::{APP_DESCRIPTION, APP_NAME, DEFAULT_SEED_DAYS};
use crate::dates;
use crate::errors::AppResult;
use crate::moods::Mood;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Record one mood and one small win per day
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Show today's entry
    Today,

    /// Record the mood and highlight for a day (today by default)
    Log {
        /// Day to record (format: YYYY-MM-DD or YYYYMMDD)
        #[clap(short = 'd', long)]
        date: Option<String>,

        /// Mood value from 1 to 12
        #[clap(short = 'm', long)]
        mood: Option<i64>,

        /// One good thing that happened
        #[clap(short = 'w', long)]
        highlight: Option<String>,
    },

    /// Show the entry for a specific date
    Show {
        /// Day to show (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
    },

    /// List entries, newest first
    List {
        /// Only entries with a highlight
        #[clap(long)]
        highlights: bool,

        /// Print JSON instead of text
        #[clap(long)]
        json: bool,
    },

    /// Show streaks and counts
    Stats {
        /// Print JSON instead of text
        #[clap(long)]
        json: bool,
    },

    /// Permanently delete every entry
    Reset {
        /// Confirm the deletion
        #[clap(long)]
        yes: bool,
    },

    /// Fill the journal with generated entries ending today
    Seed {
        /// Number of consecutive days to write
        #[clap(long, default_value_t = DEFAULT_SEED_DAYS)]
        days: u32,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

/// Resolves an optional `--date` argument, defaulting to today's local date.
///
/// # Errors
///
/// Returns `AppError::InvalidDate` if the argument does not parse.
pub fn resolve_date(date: Option<&str>) -> AppResult<NaiveDate> {
    match date {
        Some(raw) => dates::parse_user_date(raw),
        None => Ok(dates::today()),
    }
}

/// Validates a `--mood` argument against the taxonomy.
///
/// # Errors
///
/// Returns `AppError::InvalidMood` for values outside 1-12.
pub fn resolve_mood(mood: Option<i64>) -> AppResult<Option<i64>> {
    mood.map(|value| Mood::parse_value(value).map(Mood::value))
        .transpose()
}

/// Trims a `--highlight` argument; blank text is stored as no highlight.
pub fn normalize_highlight(highlight: Option<&str>) -> Option<String> {
    highlight
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
}
