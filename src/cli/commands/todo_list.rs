//! Todo list CLI commands
//!
//! Commands are generic over [`TodoStore`] so they run against either backing.

use tabled::{Table, Tabled};

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{OutputFormat, apply_table_style, to_json, truncate_with_ellipsis};
use crate::db::{Id, TodoList, TodoStore};

#[derive(Tabled)]
pub(crate) struct TodoListDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: Id,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Done")]
    pub(crate) progress: String,
    #[tabled(rename = "Status")]
    pub(crate) status: String,
}

impl From<&TodoList> for TodoListDisplay {
    fn from(todo_list: &TodoList) -> Self {
        let done = todo_list.todos.iter().filter(|t| t.done).count();
        let status = if todo_list.is_done() { "done" } else { "open" };
        Self {
            id: todo_list.id,
            title: truncate_with_ellipsis(&todo_list.title, 40),
            progress: format!("{}/{}", done, todo_list.todos.len()),
            status: status.to_string(),
        }
    }
}

pub(crate) fn format_table(todo_lists: &[TodoList]) -> String {
    if todo_lists.is_empty() {
        return "No todo lists found.".to_string();
    }

    let display: Vec<TodoListDisplay> = todo_lists.iter().map(TodoListDisplay::from).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

/// List all todo lists, not-done first.
pub async fn list_todo_lists<S: TodoStore>(store: &S, format: &str) -> CliResult<String> {
    let format = OutputFormat::parse(format)?;
    let todo_lists = store.sorted_todo_lists().await?;

    match format {
        OutputFormat::Json => to_json(&todo_lists),
        OutputFormat::Table => Ok(format_table(&todo_lists)),
    }
}

pub async fn create_todo_list<S: TodoStore>(store: &mut S, title: &str) -> CliResult<String> {
    match store.create_todo_list(title).await? {
        Some(id) => Ok(format!("Created todo list {} ({})", id, title)),
        None => Ok(format!("A todo list titled '{}' already exists", title)),
    }
}

pub async fn rename_todo_list<S: TodoStore>(
    store: &mut S,
    todo_list_id: Id,
    title: &str,
) -> CliResult<String> {
    if store.load_todo_list(todo_list_id).await?.is_none() {
        return Err(not_found(todo_list_id));
    }
    if store.set_title_todo_list(todo_list_id, title).await? {
        Ok(format!("Renamed todo list {} to '{}'", todo_list_id, title))
    } else {
        Ok(format!("A todo list titled '{}' already exists", title))
    }
}

pub async fn delete_todo_list<S: TodoStore>(store: &mut S, todo_list_id: Id) -> CliResult<String> {
    if store.delete_todo_list(todo_list_id).await? {
        Ok(format!("Deleted todo list {}", todo_list_id))
    } else {
        Err(not_found(todo_list_id))
    }
}

pub async fn complete_todo_list<S: TodoStore>(
    store: &mut S,
    todo_list_id: Id,
) -> CliResult<String> {
    if store.mark_all_todos_done(todo_list_id).await? {
        Ok(format!("Marked all todos of list {} done", todo_list_id))
    } else {
        Err(not_found(todo_list_id))
    }
}

fn not_found(todo_list_id: Id) -> CliError {
    CliError::NotFound {
        entity: "Todo list",
        id: todo_list_id.to_string(),
    }
}
