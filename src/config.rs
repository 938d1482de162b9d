//! Store configuration and path resolution.
//!
//! Provides XDG-compliant default paths, overridable through environment
//! variables.

use std::env;
use std::path::PathBuf;

use crate::db::{DEFAULT_MAX_CONNECTIONS, DbError, DbResult};

/// Environment variable overriding the database file path.
pub const DB_PATH_ENV: &str = "TODOLISTS_DB";

/// Environment variable overriding the connection pool size.
pub const MAX_CONNECTIONS_ENV: &str = "TODOLISTS_MAX_CONNECTIONS";

/// Connection settings for the SQLite store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_path: PathBuf,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: get_db_path(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl StoreConfig {
    /// Build the configuration from the environment, falling back to defaults.
    pub fn from_env() -> DbResult<Self> {
        let mut config = Self::default();

        if let Ok(path) = env::var(DB_PATH_ENV)
            && !path.is_empty()
        {
            config.database_path = PathBuf::from(path);
        }

        if let Ok(raw) = env::var(MAX_CONNECTIONS_ENV) {
            config.max_connections = match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(DbError::Validation {
                        message: format!("{} must be a positive integer, got '{}'", MAX_CONNECTIONS_ENV, raw),
                    });
                }
            };
        }

        Ok(config)
    }
}

/// Get XDG-compliant data directory for todolists.
///
/// # Returns
/// `$XDG_DATA_HOME/todolists`, else `~/.local/share/todolists`, else
/// `./todolists` when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join("todolists")
}

/// Get database file path (data_dir/todolists.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("todolists.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            env::remove_var(DB_PATH_ENV);
            env::remove_var(MAX_CONNECTIONS_ENV);
        }
    }

    #[test]
    fn test_get_db_path_ends_with_todolists_db() {
        let path = get_db_path();
        assert!(path.ends_with("todolists/todolists.db"));
    }

    #[test]
    #[serial]
    fn from_env_uses_defaults() {
        clear_env();
        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    #[serial]
    fn from_env_reads_overrides() {
        clear_env();
        unsafe {
            env::set_var(DB_PATH_ENV, "/tmp/custom.db");
            env::set_var(MAX_CONNECTIONS_ENV, "9");
        }

        let config = StoreConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.database_path, PathBuf::from("/tmp/custom.db"));
        assert_eq!(config.max_connections, 9);
    }

    #[test]
    #[serial]
    fn from_env_rejects_bad_pool_size() {
        clear_env();
        unsafe {
            env::set_var(MAX_CONNECTIONS_ENV, "zero");
        }

        let result = StoreConfig::from_env();
        clear_env();

        assert!(matches!(result, Err(DbError::Validation { .. })));
    }
}
