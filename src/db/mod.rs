//! Persistence layer for todo lists.
//!
//! This module provides trait-based abstractions for data access, so the
//! request layer can run on the SQLite store or the session store without
//! changing.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (TodoList, Todo, Session)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLite-backed store
//! - `session`: Store over caller-owned session state

mod error;
mod models;
mod repository;
pub mod seed;
pub mod session;
pub mod sort;
pub mod sqlite;
pub mod utils;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use session::SessionTodoStore;
pub use sqlite::{DEFAULT_MAX_CONNECTIONS, SqliteDatabase, SqliteTodoStore};
