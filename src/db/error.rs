//! Database error types.
//!
//! This module provides abstracted error types for store operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! Absent rows are not errors: stores report them as `None` or `false`.

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Database error: {message}")]
    #[diagnostic(code(todolists::db::database_error))]
    Database { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(todolists::db::connection_error),
        help("Check that the database path is writable, or set TODOLISTS_DB")
    )]
    Connection { message: String },

    #[error("Schema error: {message}")]
    #[diagnostic(code(todolists::db::schema_error))]
    Schema { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(todolists::db::constraint))]
    Constraint { message: String },

    #[error("Credential error: {message}")]
    #[diagnostic(code(todolists::db::credential_error))]
    Credential { message: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(todolists::db::validation_error))]
    Validation { message: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => DbError::Constraint {
                message: db_err.message().to_string(),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => DbError::Connection {
                message: e.to_string(),
            },
            _ => DbError::Database {
                message: e.to_string(),
            },
        }
    }
}

/// Result type for store operations.
pub type DbResult<T> = Result<T, DbError>;
