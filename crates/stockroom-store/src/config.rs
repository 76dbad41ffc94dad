//! # Store Configuration
//!
//! Where the data file lives.

use std::path::{Path, PathBuf};

use stockroom_core::DEFAULT_DATA_FILE;

/// Store configuration.
///
/// ## Example
/// ```rust
/// use stockroom_store::StoreConfig;
///
/// let config = StoreConfig::new("./data/inventory.csv");
/// assert_eq!(config.data_file().to_str(), Some("./data/inventory.csv"));
///
/// // Default: inventory.csv in the working directory
/// assert_eq!(StoreConfig::default().data_file().to_str(), Some("inventory.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the data file. Created on first save if it doesn't exist.
    pub data_file: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration for the given data file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_file: path.into(),
        }
    }

    /// Path to the data file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(DEFAULT_DATA_FILE)
    }
}
