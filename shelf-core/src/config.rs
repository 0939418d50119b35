//! View configuration, read from the environment

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default books endpoint
pub const DEFAULT_BOOKS_URL: &str = "http://localhost:3000/books.json";

/// Delay between mounting the view and the first fetch
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(2000);

/// Artificial delay before a sort is applied
pub const DEFAULT_SORT_DELAY: Duration = Duration::from_millis(1000);

const ENV_BOOKS_URL: &str = "SHELF_BOOKS_URL";
const ENV_INITIAL_DELAY_MS: &str = "SHELF_INITIAL_DELAY_MS";
const ENV_SORT_DELAY_MS: &str = "SHELF_SORT_DELAY_MS";
const ENV_SEARCH_MODE: &str = "SHELF_SEARCH_MODE";

/// Which list a search filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Filter whatever is currently displayed; searches only ever narrow the list
    #[default]
    Cumulative,
    /// Always filter the last fetched list
    Pristine,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cumulative" => Ok(Self::Cumulative),
            "pristine" => Ok(Self::Pristine),
            other => Err(format!("unknown search mode '{}'", other)),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cumulative => f.write_str("cumulative"),
            Self::Pristine => f.write_str("pristine"),
        }
    }
}

/// Settings for a [`crate::LibraryView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Books endpoint used by the HTTP source
    pub books_url: String,

    /// Wait before the first fetch after mount
    pub initial_delay: Duration,

    /// Wait before a sort is applied
    pub sort_delay: Duration,

    /// Search behaviour
    pub search_mode: SearchMode,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            books_url: DEFAULT_BOOKS_URL.to_string(),
            initial_delay: DEFAULT_INITIAL_DELAY,
            sort_delay: DEFAULT_SORT_DELAY,
            search_mode: SearchMode::default(),
        }
    }
}

impl ViewConfig {
    /// Build a config from `SHELF_*` environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BOOKS_URL) {
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_BOOKS_URL,
                    value: url,
                });
            }
            config.books_url = url;
        }
        if let Some(value) = lookup(ENV_INITIAL_DELAY_MS) {
            config.initial_delay = parse_millis(ENV_INITIAL_DELAY_MS, value)?;
        }
        if let Some(value) = lookup(ENV_SORT_DELAY_MS) {
            config.sort_delay = parse_millis(ENV_SORT_DELAY_MS, value)?;
        }
        if let Some(value) = lookup(ENV_SEARCH_MODE) {
            config.search_mode = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_SEARCH_MODE,
                value,
            })?;
        }

        Ok(config)
    }

    /// Drop both artificial delays
    pub fn without_delays(mut self) -> Self {
        self.initial_delay = Duration::ZERO;
        self.sort_delay = Duration::ZERO;
        self
    }

    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }
}

fn parse_millis(key: &'static str, value: String) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
