//! Persistence layer for a todo-list web application.
//!
//! Two interchangeable stores implement [`db::TodoStore`]: a SQLite store
//! scoped per user, and a store over caller-owned session state.

pub mod cli;
pub mod config;
pub mod db;
