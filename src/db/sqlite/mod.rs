//! SQLite implementation of the store traits.
//!
//! This module provides a SQLite-backed implementation of the traits defined
//! in the parent module.

mod connection;
mod helpers;
mod todo_store;

#[cfg(test)]
mod auth_test;

pub use connection::{DEFAULT_MAX_CONNECTIONS, SqliteDatabase};
pub use helpers::is_unique_violation;
pub use todo_store::SqliteTodoStore;
