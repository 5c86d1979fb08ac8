use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

use crate::store::SAVED_BETS_KEY;

/// Default storage file (relative to the working directory)
pub const DEFAULT_STORE_PATH: &str = "data/bets.json";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON file backing the key-value storage
    pub store_path: PathBuf,
    /// Key the bet list is saved under
    pub storage_key: String,
    /// Maximum log level
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            storage_key: SAVED_BETS_KEY.to_string(),
            log_level: Level::WARN,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `SPORTSBET_STORE` and `SPORTSBET_LOG`
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SPORTSBET_STORE").ok(),
            std::env::var("SPORTSBET_LOG").ok(),
        )
    }

    fn from_vars(store: Option<String>, log: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = store.filter(|p| !p.is_empty()) {
            config.store_path = PathBuf::from(path);
        }
        // Unknown level names keep the default
        if let Some(level) = log.and_then(|l| Level::from_str(&l).ok()) {
            config.log_level = level;
        }
        config
    }

    /// Raise the log level by `verbosity` steps above the configured one
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        let levels = [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE];
        let current = levels
            .iter()
            .position(|l| *l == self.log_level)
            .unwrap_or(1);
        let raised = (current + verbosity as usize).min(levels.len() - 1);
        self.log_level = levels[raised];
        self
    }
}
