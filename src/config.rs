//! Startup configuration: an optional JSON file plus environment overrides.

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Names the configuration file to read.
pub const CONFIG_PATH_ENV: &str = "COUNTRYMGR_CONFIG";
/// Overrides [`Config::database_path`].
pub const DATABASE_ENV: &str = "COUNTRYMGR_DB";
/// Overrides [`Config::log_filter`].
pub const LOG_FILTER_ENV: &str = "COUNTRYMGR_LOG";

pub const DEFAULT_CONFIG_PATH: &str = "countrymgr.json";
pub const DEFAULT_DATABASE_PATH: &str = "countrymgr.db";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file [{}]: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file [{}]: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite database file.
    pub database_path: PathBuf,
    /// `tracing-subscriber` env-filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Reads the file named by `COUNTRYMGR_CONFIG` (or the default path), then
    /// applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at [{}], using defaults.", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(db) = lookup(DATABASE_ENV).filter(|v| !v.is_empty()) {
            self.database_path = PathBuf::from(db);
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.is_empty()) {
            self.log_filter = filter;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::from_file(Path::new("definitely/not/here.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("countrymgr.json");
        std::fs::write(&path, r#"{ "database_path": "world.db" }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.database_path, PathBuf::from("world.db"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("countrymgr.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn environment_overrides_win() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            DATABASE_ENV => Some("other.db".to_string()),
            LOG_FILTER_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.database_path, PathBuf::from("other.db"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
