//! Domain models for the todo-list stores.
//!
//! These models are storage-agnostic: both the SQLite store and the session
//! store hand out owned copies of them.

use serde::{Deserialize, Serialize};

/// Integer ID type used for all entities.
pub type Id = i64;

/// A single todo item inside a todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Id,
    pub title: String,
    pub done: bool,
    /// Back-reference to the owning list.
    pub todolist_id: Id,
    pub username: String,
}

/// A titled list of todos owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: Id,
    pub title: String,
    pub username: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// A list is done when it has at least one todo and every todo is done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.done)
    }

    pub fn has_undone_todos(&self) -> bool {
        self.todos.iter().any(|todo| !todo.done)
    }
}

/// Caller-owned session state.
///
/// The session store reads and writes `todo_lists`; the web layer owns the
/// value and decides how long it lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    #[serde(default, rename = "todoLists", skip_serializing_if = "Option::is_none")]
    pub todo_lists: Option<Vec<TodoList>>,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            todo_lists: None,
        }
    }
}
