//! SQLite database connection and schema management.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info};

use super::SqliteTodoStore;
use super::helpers::is_unique_violation;
use crate::config::StoreConfig;
use crate::db::{DbError, DbResult, utils::hash_password};

/// Idempotent schema script, embedded at compile time.
const SCHEMA: &str = include_str!("../../../data/sql/sqlite/schema.sql");

/// Default pool size for file-backed databases.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// SQLite database handle.
///
/// Owns the connection pool; stores borrow it and are created per user via
/// [`SqliteDatabase::todo_store`].
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (creating if missing) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        Self::open_with(path, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Open the database described by `config`.
    pub async fn connect(config: &StoreConfig) -> DbResult<Self> {
        Self::open_with(&config.database_path, config.max_connections).await
    }

    async fn open_with<P: AsRef<Path>>(path: P, max_connections: u32) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        info!(path = %path.as_ref().display(), "opened todolists database");
        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Each SQLite in-memory connection is its own database, so the pool is
    /// pinned to one connection that is never recycled.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Apply the embedded schema. Safe to run repeatedly.
    pub async fn init_schema(&self) -> DbResult<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::Schema {
                message: e.to_string(),
            })?;
        debug!("schema applied");
        Ok(())
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// A todo store scoped to `username`.
    pub fn todo_store(&self, username: impl Into<String>) -> SqliteTodoStore<'_> {
        SqliteTodoStore::new(&self.pool, username)
    }

    /// Register a user with an argon2-hashed password.
    ///
    /// Returns `false` when the username is already taken.
    pub async fn create_user(&self, username: &str, password: &str) -> DbResult<bool> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(DbError::Validation {
                message: "username and password must not be empty".to_string(),
            });
        }

        let password = password.to_string();
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| DbError::Credential {
                message: format!("Password hashing task failed: {}", e),
            })??;

        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(&hash)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.rows_affected() > 0),
            Err(e) => {
                let err = DbError::from(e);
                if is_unique_violation(&err) {
                    Ok(false)
                } else {
                    Err(err)
                }
            }
        }
    }
}
