//! Store Configuration

use serde::{Deserialize, Serialize};

use crate::domain::{SystemClock, DEFAULT_TIMESTAMP_FORMAT};

pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Where the list is kept and how completion times are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Persistence key (browser storage key, or file stem for file storage)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// chrono format string for `completedDate`
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl StoreConfig {
    /// Wall clock using the configured format
    pub fn clock(&self) -> SystemClock {
        SystemClock::with_format(self.timestamp_format.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.timestamp_format, "%-d/%-m/%Y, %-H:%M:%S");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"storage_key":"groceries"}"#).unwrap();
        assert_eq!(config.storage_key, "groceries");
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }
}
