/*!
# Small Wins

Small Wins is a daily journal that asks for very little: one mood and one
"small win" per calendar day. Entries are kept in a local SQLite file and the
journal reports streaks and recent activity computed from them.

## Core Features

- One entry per local calendar day, created or overwritten with a single upsert
- Listing of every entry, or only those with a highlight, newest first
- Current and longest streaks, plus rolling weekly and month-to-date counts
- Explicit, irreversible reset of the whole journal

## Architecture

- `dates`: Local-timezone date keys, display formatting and timestamps
- `db`: SQLite schema, pooled connections and entry queries
- `store`: `EntryStore`, the storage handle with its failure policy
- `stats`: Streak and count computation
- `moods`: The mood taxonomy
- `config`, `errors`, `cli`, `seed`: Application plumbing

## Usage Example

```rust,no_run
use smallwins::{dates, Config, EntryStore};

fn main() -> smallwins::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let store = EntryStore::open(&config.db_path)?;
    store.upsert(dates::today(), Some(3), Some("Walked to work"))?;

    let stats = store.compute_stats();
    println!("Current streak: {} days", stats.current_streak);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants shared across modules
pub mod constants;
/// Local calendar date keys and timestamps
pub mod dates;
/// SQLite storage
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Mood taxonomy
pub mod moods;
/// Generated sample entries
pub mod seed;
/// Streak and count statistics
pub mod stats;
/// The entry store handle
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use db::entries::Entry;
pub use errors::{AppError, AppResult};
pub use moods::Mood;
pub use stats::StreakStats;
pub use store::EntryStore;
