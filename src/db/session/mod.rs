//! Session-backed implementation of the store traits.
//!
//! Todo lists live inside a caller-owned [`Session`](crate::db::Session) and
//! are mutated in place; nothing is persisted beyond the session itself.

mod store;


pub use store::SessionTodoStore;
