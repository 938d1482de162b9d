//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "no such table: todos".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: no such table: todos");
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open database".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: unable to open database");
}

#[test]
fn constraint_error_displays_correctly() {
    let err = DbError::Constraint {
        message: "UNIQUE constraint failed: todolists.username, todolists.title".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Constraint violation: UNIQUE constraint failed: todolists.username, todolists.title"
    );
}

#[test]
fn credential_error_displays_correctly() {
    let err = DbError::Credential {
        message: "password hash is malformed".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Credential error: password hash is malformed"
    );
}

#[test]
fn row_not_found_maps_to_database_error() {
    let err: DbError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn pool_timeout_maps_to_connection_error() {
    let err: DbError = sqlx::Error::PoolTimedOut.into();
    assert!(matches!(err, DbError::Connection { .. }));
}

#[test]
fn db_result_err_returns_error() {
    let result: DbResult<bool> = Err(DbError::Validation {
        message: "title must not be empty".to_string(),
    });
    assert!(result.is_err());
}
