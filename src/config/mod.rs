//! Configuration management for the smallwins application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `SMALLWINS_DB`: Path to the database file (defaults to ~/.local/share/smallwins/smallwins.db)
//! - `SMALLWINS_LOG_FORMAT`: `text` (default) or `json`
//! - `SMALLWINS_LOG_LEVEL`: Default log filter (defaults to `info`; `RUST_LOG` overrides it)
//! - `HOME`: Used for expanding the default database path

use crate::constants::{
    DEFAULT_DB_SUBPATH, DEFAULT_LOG_LEVEL, ENV_VAR_HOME, ENV_VAR_SMALLWINS_DB,
    ENV_VAR_SMALLWINS_LOG_FORMAT, ENV_VAR_SMALLWINS_LOG_LEVEL, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> AppResult<Self> {
        match raw.to_ascii_lowercase().as_str() {
            LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            LOG_FORMAT_JSON => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "Unknown log format '{}'. Expected '{}' or '{}'",
                other, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            ))),
        }
    }
}

/// Configuration for the smallwins application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use smallwins::Config;
/// use smallwins::config::LogFormat;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/path/to/smallwins.db"),
///     log_format: LogFormat::Text,
///     log_level: "info".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Location of the SQLite database file.
    pub db_path: PathBuf,

    /// Format of log lines written to stderr.
    pub log_format: LogFormat,

    /// Default `tracing` filter directive.
    pub log_level: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_path", &REDACTED_PLACEHOLDER)
            .field("log_format", &self.log_format)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(""),
            log_format: LogFormat::Text,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The database path is expanded using `shellexpand` to handle `~` and
    /// environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The database path expansion fails or yields an empty path
    /// - The log format is neither `text` nor `json`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use smallwins::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Loaded config: {:?}", config),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let db_path_str = env::var(ENV_VAR_SMALLWINS_DB).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DB_SUBPATH)
        });

        let expanded_path = shellexpand::full(&db_path_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let db_path = PathBuf::from(expanded_path.into_owned());

        if db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        let log_format = match env::var(ENV_VAR_SMALLWINS_LOG_FORMAT) {
            Ok(raw) => LogFormat::parse(&raw)?,
            Err(_) => LogFormat::Text,
        };

        let log_level = env::var(ENV_VAR_SMALLWINS_LOG_LEVEL)
            .ok()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            db_path,
            log_format,
            log_level,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Database path is empty" if the database path is empty
    /// - "Database path must be an absolute path" if the path is relative
    /// - "Database path must name a file" if the path ends in `..` or a root
    pub fn validate(&self) -> AppResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        if !self.db_path.is_absolute() {
            return Err(AppError::Config(
                "Database path must be an absolute path".to_string(),
            ));
        }

        if self.db_path.file_name().is_none() {
            return Err(AppError::Config(
                "Database path must name a file".to_string(),
            ));
        }

        Ok(())
    }
}
