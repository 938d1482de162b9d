//! Todo CLI commands

use tabled::{Table, Tabled};

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{OutputFormat, apply_table_style, to_json, truncate_with_ellipsis};
use crate::db::{Id, Todo, TodoStore};

#[derive(Tabled)]
pub(crate) struct TodoDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: Id,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Done")]
    pub(crate) done: String,
}

impl From<&Todo> for TodoDisplay {
    fn from(todo: &Todo) -> Self {
        let done = if todo.done { "x" } else { " " };
        Self {
            id: todo.id,
            title: truncate_with_ellipsis(&todo.title, 60),
            done: done.to_string(),
        }
    }
}

pub(crate) fn format_table(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }

    let display: Vec<TodoDisplay> = todos.iter().map(TodoDisplay::from).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

/// List the todos of one list, not-done first.
pub async fn list_todos<S: TodoStore>(
    store: &S,
    todo_list_id: Id,
    format: &str,
) -> CliResult<String> {
    let format = OutputFormat::parse(format)?;
    let todo_list = store
        .load_todo_list(todo_list_id)
        .await?
        .ok_or_else(|| CliError::NotFound {
            entity: "Todo list",
            id: todo_list_id.to_string(),
        })?;
    let todos = store.sorted_todos(&todo_list).await?;

    match format {
        OutputFormat::Json => to_json(&todos),
        OutputFormat::Table => Ok(format!("{}\n{}", todo_list.title, format_table(&todos))),
    }
}

pub async fn add_todo<S: TodoStore>(
    store: &mut S,
    todo_list_id: Id,
    title: &str,
) -> CliResult<String> {
    if store.add_todo(todo_list_id, title).await? {
        Ok(format!("Added '{}' to todo list {}", title, todo_list_id))
    } else {
        Err(CliError::NotFound {
            entity: "Todo list",
            id: todo_list_id.to_string(),
        })
    }
}

pub async fn toggle_todo<S: TodoStore>(
    store: &mut S,
    todo_list_id: Id,
    todo_id: Id,
) -> CliResult<String> {
    if !store.toggle_todo_done_status(todo_list_id, todo_id).await? {
        return Err(todo_not_found(todo_list_id, todo_id));
    }
    let todo = store
        .load_todo(todo_list_id, todo_id)
        .await?
        .ok_or_else(|| todo_not_found(todo_list_id, todo_id))?;

    let state = if todo.done { "done" } else { "not done" };
    Ok(format!("Marked '{}' {}", todo.title, state))
}

pub async fn delete_todo<S: TodoStore>(
    store: &mut S,
    todo_list_id: Id,
    todo_id: Id,
) -> CliResult<String> {
    if store.delete_todo(todo_list_id, todo_id).await? {
        Ok(format!("Deleted todo {}", todo_id))
    } else {
        Err(todo_not_found(todo_list_id, todo_id))
    }
}

fn todo_not_found(todo_list_id: Id, todo_id: Id) -> CliError {
    CliError::NotFound {
        entity: "Todo",
        id: format!("{}/{}", todo_list_id, todo_id),
    }
}
