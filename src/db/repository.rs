//! Store traits for data access abstraction.
//!
//! These traits define the contract the request layer programs against, so the
//! SQLite store and the session store can be swapped without changing it.
//! Every operation is scoped to the user the store was constructed for.

use std::future::Future;

use crate::db::{
    DbError, DbResult,
    models::{Id, Todo, TodoList},
};

/// Todo-list and todo operations shared by every backing.
///
/// Lookups return `None` when nothing matches and mutations return `false`
/// when a referenced entity is absent; `Err` is reserved for storage failures.
pub trait TodoStore: Send {
    /// All todo lists with their todos: not-done lists first, then done
    /// lists, each group ordered by title (case-insensitive).
    fn sorted_todo_lists(&self) -> impl Future<Output = DbResult<Vec<TodoList>>> + Send;

    /// Todos of a list: not-done first, then done, each group ordered by
    /// title (case-insensitive).
    fn sorted_todos(&self, todo_list: &TodoList)
    -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Load a todo list with its todos.
    fn load_todo_list(&self, todo_list_id: Id)
    -> impl Future<Output = DbResult<Option<TodoList>>> + Send;

    /// Load a single todo of a list.
    fn load_todo(
        &self,
        todo_list_id: Id,
        todo_id: Id,
    ) -> impl Future<Output = DbResult<Option<Todo>>> + Send;

    /// Flip the done flag of a todo.
    fn toggle_todo_done_status(
        &mut self,
        todo_list_id: Id,
        todo_id: Id,
    ) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete a todo from a list.
    fn delete_todo(
        &mut self,
        todo_list_id: Id,
        todo_id: Id,
    ) -> impl Future<Output = DbResult<bool>> + Send;

    /// Mark every todo of a list done. Succeeds for an existing empty list.
    fn mark_all_todos_done(&mut self, todo_list_id: Id)
    -> impl Future<Output = DbResult<bool>> + Send;

    /// Append a new, not-done todo to a list.
    fn add_todo(
        &mut self,
        todo_list_id: Id,
        title: &str,
    ) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete a todo list together with its todos.
    fn delete_todo_list(&mut self, todo_list_id: Id)
    -> impl Future<Output = DbResult<bool>> + Send;

    /// Rename a todo list. Returns `false` if the list is absent or the new
    /// title is already used by another list.
    fn set_title_todo_list(
        &mut self,
        todo_list_id: Id,
        title: &str,
    ) -> impl Future<Output = DbResult<bool>> + Send;

    /// Whether a list with exactly this title exists.
    fn exists_todo_list_title(&self, title: &str) -> impl Future<Output = DbResult<bool>> + Send;

    /// Create an empty todo list. Returns the new list's id, or `None` when
    /// the title is already taken.
    fn create_todo_list(&mut self, title: &str)
    -> impl Future<Output = DbResult<Option<Id>>> + Send;

    /// Whether `error` reports a uniqueness violation of this backing.
    fn is_unique_constraint_violation(&self, error: &DbError) -> bool;
}

/// Credential verification.
pub trait Authenticator {
    /// Verify a plaintext password for `username`.
    ///
    /// Unknown users and wrong passwords both yield `Ok(false)`.
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = DbResult<bool>> + Send;
}
