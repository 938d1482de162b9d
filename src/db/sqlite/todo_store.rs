//! SQLite TodoStore implementation.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{debug, instrument, warn};

use super::helpers::{is_unique_violation, row_to_todo, row_to_todo_list};
use crate::db::sort::{sort_todo_lists, sort_todos};
use crate::db::utils::verify_password;
use crate::db::{Authenticator, DbError, DbResult, Id, Todo, TodoList, TodoStore};

const TODO_COLUMNS: &str = "id, todolist_id, title, done, username";

/// SQLx-backed todo store scoped to one user.
///
/// The username is captured at construction; every statement filters on it.
pub struct SqliteTodoStore<'a> {
    pub(crate) pool: &'a SqlitePool,
    username: String,
}

impl<'a> SqliteTodoStore<'a> {
    pub fn new(pool: &'a SqlitePool, username: impl Into<String>) -> Self {
        Self {
            pool,
            username: username.into(),
        }
    }

    /// The user every operation is scoped to.
    pub fn username(&self) -> &str {
        &self.username
    }

    async fn todo_list_exists(&self, todo_list_id: Id) -> DbResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM todolists WHERE id = ? AND username = ?)",
        )
        .bind(todo_list_id)
        .bind(&self.username)
        .fetch_one(self.pool)
        .await?;
        Ok(exists)
    }
}

impl<'a> TodoStore for SqliteTodoStore<'a> {
    #[instrument(skip(self), fields(username = %self.username))]
    async fn sorted_todo_lists(&self) -> DbResult<Vec<TodoList>> {
        let all_todo_lists =
            "SELECT id, title, username FROM todolists WHERE username = ? ORDER BY lower(title) ASC";
        let all_todos =
            format!("SELECT {TODO_COLUMNS} FROM todos WHERE username = ? ORDER BY id");

        let (list_rows, todo_rows) = tokio::try_join!(
            sqlx::query(all_todo_lists)
                .bind(&self.username)
                .fetch_all(self.pool),
            sqlx::query(&all_todos)
                .bind(&self.username)
                .fetch_all(self.pool),
        )?;

        let mut todos_by_list: HashMap<Id, Vec<Todo>> = HashMap::new();
        for todo in todo_rows.iter().map(row_to_todo) {
            todos_by_list.entry(todo.todolist_id).or_default().push(todo);
        }

        let todo_lists = list_rows
            .iter()
            .map(|row| {
                let mut todo_list = row_to_todo_list(row);
                todo_list.todos = todos_by_list.remove(&todo_list.id).unwrap_or_default();
                todo_list
            })
            .collect();

        // SQLite's lower() folds ASCII only
        Ok(sort_todo_lists(todo_lists))
    }

    async fn sorted_todos(&self, todo_list: &TodoList) -> DbResult<Vec<Todo>> {
        let sql = format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE todolist_id = ? AND username = ? \
             ORDER BY done ASC, lower(title) ASC"
        );
        let rows = sqlx::query(&sql)
            .bind(todo_list.id)
            .bind(&self.username)
            .fetch_all(self.pool)
            .await?;

        Ok(sort_todos(rows.iter().map(row_to_todo).collect()))
    }

    #[instrument(skip(self), fields(username = %self.username))]
    async fn load_todo_list(&self, todo_list_id: Id) -> DbResult<Option<TodoList>> {
        let find_todos = format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE todolist_id = ? AND username = ? ORDER BY id"
        );

        let (list_row, todo_rows) = tokio::try_join!(
            sqlx::query("SELECT id, title, username FROM todolists WHERE id = ? AND username = ?")
                .bind(todo_list_id)
                .bind(&self.username)
                .fetch_optional(self.pool),
            sqlx::query(&find_todos)
                .bind(todo_list_id)
                .bind(&self.username)
                .fetch_all(self.pool),
        )?;

        let Some(list_row) = list_row else {
            return Ok(None);
        };

        let mut todo_list = row_to_todo_list(&list_row);
        todo_list.todos = todo_rows.iter().map(row_to_todo).collect();
        Ok(Some(todo_list))
    }

    async fn load_todo(&self, todo_list_id: Id, todo_id: Id) -> DbResult<Option<Todo>> {
        let sql = format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE todolist_id = ? AND id = ? AND username = ?"
        );
        let row = sqlx::query(&sql)
            .bind(todo_list_id)
            .bind(todo_id)
            .bind(&self.username)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_todo))
    }

    #[instrument(skip(self), fields(username = %self.username))]
    async fn toggle_todo_done_status(&mut self, todo_list_id: Id, todo_id: Id) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE todos SET done = NOT done WHERE todolist_id = ? AND id = ? AND username = ?",
        )
        .bind(todo_list_id)
        .bind(todo_id)
        .bind(&self.username)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(username = %self.username))]
    async fn delete_todo(&mut self, todo_list_id: Id, todo_id: Id) -> DbResult<bool> {
        let result =
            sqlx::query("DELETE FROM todos WHERE todolist_id = ? AND id = ? AND username = ?")
                .bind(todo_list_id)
                .bind(todo_id)
                .bind(&self.username)
                .execute(self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(username = %self.username))]
    async fn mark_all_todos_done(&mut self, todo_list_id: Id) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE todos SET done = 1 WHERE done = 0 AND todolist_id = ? AND username = ?",
        )
        .bind(todo_list_id)
        .bind(&self.username)
        .execute(self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        // Nothing left to update still counts as success for an owned list.
        self.todo_list_exists(todo_list_id).await
    }

    #[instrument(skip(self), fields(username = %self.username))]
    async fn add_todo(&mut self, todo_list_id: Id, title: &str) -> DbResult<bool> {
        let result = sqlx::query(
            "INSERT INTO todos (todolist_id, title, username) \
             SELECT id, ?, username FROM todolists WHERE id = ? AND username = ?",
        )
        .bind(title)
        .bind(todo_list_id)
        .bind(&self.username)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(username = %self.username))]
    async fn delete_todo_list(&mut self, todo_list_id: Id) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM todolists WHERE id = ? AND username = ?")
            .bind(todo_list_id)
            .bind(&self.username)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(username = %self.username))]
    async fn set_title_todo_list(&mut self, todo_list_id: Id, title: &str) -> DbResult<bool> {
        let result = sqlx::query("UPDATE todolists SET title = ? WHERE id = ? AND username = ?")
            .bind(title)
            .bind(todo_list_id)
            .bind(&self.username)
            .execute(self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.rows_affected() > 0),
            Err(e) => {
                let err = DbError::from(e);
                if self.is_unique_constraint_violation(&err) {
                    debug!("title already used by another list");
                    Ok(false)
                } else {
                    Err(err)
                }
            }
        }
    }

    async fn exists_todo_list_title(&self, title: &str) -> DbResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM todolists WHERE title = ? AND username = ?)",
        )
        .bind(title)
        .bind(&self.username)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    #[instrument(skip(self), fields(username = %self.username))]
    async fn create_todo_list(&mut self, title: &str) -> DbResult<Option<Id>> {
        let result = sqlx::query("INSERT INTO todolists (title, username) VALUES (?, ?)")
            .bind(title)
            .bind(&self.username)
            .execute(self.pool)
            .await;

        match result {
            Ok(done) => Ok(Some(done.last_insert_rowid())),
            Err(e) => {
                let err = DbError::from(e);
                if self.is_unique_constraint_violation(&err) {
                    debug!("title already used by another list");
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    }

    fn is_unique_constraint_violation(&self, error: &DbError) -> bool {
        is_unique_violation(error)
    }
}

impl<'a> Authenticator for SqliteTodoStore<'a> {
    #[instrument(skip(self, password))]
    async fn authenticate(&self, username: &str, password: &str) -> DbResult<bool> {
        let stored: Option<String> =
            sqlx::query_scalar("SELECT password FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(self.pool)
                .await?;

        let Some(stored) = stored else {
            debug!("unknown user");
            return Ok(false);
        };

        let password = password.to_string();
        let verified = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
            .await
            .map_err(|e| DbError::Credential {
                message: format!("Password verification task failed: {}", e),
            })?;

        match verified {
            Ok(ok) => Ok(ok),
            Err(e) => {
                warn!(error = %e, "stored password hash could not be parsed");
                Ok(false)
            }
        }
    }
}
