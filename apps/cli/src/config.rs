//! # Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`, `RUST_LOG`)
//! 2. Defaults (this file)
//!
//! No command-line flags are read.

use std::path::PathBuf;

use stockroom_core::DEFAULT_DATA_FILE;

/// Environment variable overriding the data file path.
pub const DATA_FILE_ENV: &str = "STOCKROOM_DATA_FILE";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Data file the store loads from and saves to.
    /// Default: `inventory.csv` in the working directory
    pub data_file: PathBuf,

    /// Fallback tracing filter directive.
    /// `RUST_LOG` wins over this when set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Creates a configuration from the process environment and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_DATA_FILE`: Override the data file path
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(path) = lookup(DATA_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.data_file, PathBuf::from("inventory.csv"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_data_file_override() {
        let config = AppConfig::from_lookup(|key| {
            (key == DATA_FILE_ENV).then(|| "/srv/stock/items.csv".to_string())
        });
        assert_eq!(config.data_file, PathBuf::from("/srv/stock/items.csv"));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = AppConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.data_file, PathBuf::from("inventory.csv"));
    }
}
