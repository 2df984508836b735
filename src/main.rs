/*!
# Small Wins - A Daily Mood and Highlight Journal

Command-line front end for the Small Wins journal. It records one mood and one
highlight per day and reports streaks.

## Usage

```
smallwins [OPTIONS] <COMMAND>

Commands:
  today   Show today's entry
  log     Record the mood and highlight for a day (today by default)
  show    Show the entry for a specific date
  list    List entries, newest first
  stats   Show streaks and counts
  reset   Permanently delete every entry
  seed    Fill the journal with generated entries ending today

Options:
  -v, --verbose  Print verbose output
  -h, --help     Print help
  -V, --version  Print version
```

## Configuration

- `SMALLWINS_DB`: The database file (defaults to "~/.local/share/smallwins/smallwins.db")
- `SMALLWINS_LOG_FORMAT`: `text` or `json` log lines on stderr
- `SMALLWINS_LOG_LEVEL` / `RUST_LOG`: Log filter
*/

use smallwins::cli::{self, CliArgs, Command};
use smallwins::config::{Config, LogFormat};
use smallwins::constants::{DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use smallwins::errors::AppResult;
use smallwins::{dates, seed, Entry, EntryStore, Mood, StreakStats};
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match Config::load().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config, args.verbose);

    let correlation_id = uuid::Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    debug!("CLI arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    match run(&config, args.command) {
        Ok(code) => code,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(config: &Config, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn run(config: &Config, command: Command) -> AppResult<ExitCode> {
    info!("Opening entry store");
    let store = EntryStore::open(&config.db_path)?;

    match command {
        Command::Today => {
            let today = dates::today();
            match store.get_by_date(today) {
                Some(entry) => println!("{}", render_entry(&entry)),
                None => println!("{}\nNo entry yet for today", dates::format_display(today)),
            }
        }
        Command::Log {
            date,
            mood,
            highlight,
        } => {
            let date = cli::resolve_date(date.as_deref())?;
            let mood = cli::resolve_mood(mood)?;
            let highlight = cli::normalize_highlight(highlight.as_deref());

            store.upsert(date, mood, highlight.as_deref())?;
            println!("Saved entry for {}", dates::format_display(date));
        }
        Command::Show { date } => {
            let date = cli::resolve_date(Some(&date))?;
            match store.get_by_date(date) {
                Some(entry) => println!("{}", render_entry(&entry)),
                None => println!("No entry for {}", dates::format_display(date)),
            }
        }
        Command::List { highlights, json } => {
            let entries = if highlights {
                store.get_with_highlights()
            } else {
                store.get_all()
            };

            if json {
                println!("{}", to_json(&entries)?);
            } else if entries.is_empty() {
                println!("No entries yet");
            } else {
                for entry in &entries {
                    println!("{}", render_line(entry));
                }
            }
        }
        Command::Stats { json } => {
            let streaks = store.compute_stats();
            let moods = store.mood_counts();

            if json {
                let report = serde_json::json!({
                    "stats": streaks,
                    "mood_counts": moods,
                });
                println!("{}", to_json(&report)?);
            } else {
                print!("{}", render_stats(&streaks));
                for (value, count) in moods {
                    println!("  {:<16} {}", Mood::lookup(value).to_string(), count);
                }
            }
        }
        Command::Reset { yes } => {
            if !yes {
                eprintln!("This permanently deletes every entry. Re-run with --yes to confirm.");
                return Ok(ExitCode::from(2));
            }
            let removed = store.delete_all()?;
            println!("Deleted {} entries", removed);
        }
        Command::Seed { days } => {
            let written = seed::seed_entries(&store, dates::today(), days)?;
            println!("Seeded {} entries", written);
        }
    }

    store.close();
    Ok(ExitCode::SUCCESS)
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

fn mood_text(entry: &Entry) -> String {
    entry
        .mood
        .map(|m| Mood::lookup(m).to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn render_entry(entry: &Entry) -> String {
    format!(
        "{}\nMood: {}\nHighlight: {}",
        dates::format_display(entry.date),
        mood_text(entry),
        entry.highlight.as_deref().unwrap_or("-")
    )
}

fn render_line(entry: &Entry) -> String {
    format!(
        "{}  {:<16} {}",
        dates::date_key(entry.date),
        mood_text(entry),
        entry.highlight.as_deref().unwrap_or("")
    )
    .trim_end()
    .to_string()
}

fn render_stats(s: &StreakStats) -> String {
    format!(
        "Current streak: {}\nLongest streak: {}\nTotal entries: {}\nThis week: {}\nThis month: {}\n",
        s.current_streak, s.longest_streak, s.total_entries, s.this_week_count, s.this_month_count
    )
}
