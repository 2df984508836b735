//! Constants used throughout the application.
//!
//! This module contains all constants used in the Small Wins application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "smallwins";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Record one mood and one small win per day";

// Logging defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the database file.
pub const ENV_VAR_SMALLWINS_DB: &str = "SMALLWINS_DB";
/// Environment variable selecting the log output format.
pub const ENV_VAR_SMALLWINS_LOG_FORMAT: &str = "SMALLWINS_LOG_FORMAT";
/// Environment variable selecting the default log filter.
pub const ENV_VAR_SMALLWINS_LOG_LEVEL: &str = "SMALLWINS_LOG_LEVEL";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default database location relative to the user's home directory.
pub const DEFAULT_DB_SUBPATH: &str = ".local/share/smallwins/smallwins.db";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Database
/// Maximum number of pooled SQLite connections.
pub const DB_POOL_MAX_SIZE: u32 = 4;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD). This is the date key format.
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Human-readable date format, e.g. "Sun, Jun 2, 2024".
pub const DATE_FORMAT_DISPLAY: &str = "%a, %b %-d, %Y";
/// Size of the rolling "this week" window, in days before today.
pub const WEEK_WINDOW_DAYS: i64 = 7;

// Test data generation
/// Default number of days written by the seed command.
pub const DEFAULT_SEED_DAYS: u32 = 14;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "smallwins";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
