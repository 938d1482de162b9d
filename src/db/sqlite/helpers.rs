//! Shared helper functions for the SQLite store.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::{DbError, Todo, TodoList};

/// Error-text markers of a uniqueness violation, for errors that did not
/// arrive as a structured `DbError::Constraint`.
const UNIQUE_VIOLATION_MARKERS: &[&str] = &[
    "UNIQUE constraint failed",
    "duplicate key value violates unique constraint",
];

/// Whether `error` reports a uniqueness violation.
pub fn is_unique_violation(error: &DbError) -> bool {
    match error {
        DbError::Constraint { .. } => true,
        other => {
            let text = other.to_string();
            UNIQUE_VIOLATION_MARKERS
                .iter()
                .any(|marker| text.contains(marker))
        }
    }
}

pub fn row_to_todo(row: &SqliteRow) -> Todo {
    Todo {
        id: row.get("id"),
        title: row.get("title"),
        done: row.get("done"),
        todolist_id: row.get("todolist_id"),
        username: row.get("username"),
    }
}

/// Map a `todolists` row; todos are attached by the caller.
pub fn row_to_todo_list(row: &SqliteRow) -> TodoList {
    TodoList {
        id: row.get("id"),
        title: row.get("title"),
        username: row.get("username"),
        todos: Vec::new(),
    }
}
