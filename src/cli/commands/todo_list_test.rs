use crate::cli::commands::todo_list::*;
use crate::cli::error::CliError;
use crate::db::{Session, SessionTodoStore, SqliteDatabase, Todo, TodoList, TodoStore};

fn session() -> Session {
    Session {
        username: "admin".to_string(),
        todo_lists: Some(vec![
            TodoList {
                id: 1,
                title: "Work".to_string(),
                username: "admin".to_string(),
                todos: vec![Todo {
                    id: 11,
                    title: "report".to_string(),
                    done: true,
                    todolist_id: 1,
                    username: "admin".to_string(),
                }],
            },
            TodoList {
                id: 2,
                title: "Home".to_string(),
                username: "admin".to_string(),
                todos: vec![],
            },
        ]),
    }
}

#[test]
fn test_format_table_empty() {
    assert_eq!(format_table(&[]), "No todo lists found.");
}

#[tokio::test]
async fn list_table_shows_progress_and_status() {
    let mut session = session();
    let store = SessionTodoStore::new(&mut session);

    let output = list_todo_lists(&store, "table").await.unwrap();

    assert!(output.contains("Home"));
    assert!(output.contains("1/1"));
    assert!(output.contains("done"));
    assert!(output.contains("open"));
    // Not-done lists come first.
    assert!(output.find("Home").unwrap() < output.find("Work").unwrap());
}

#[tokio::test]
async fn list_json_is_parseable() {
    let mut session = session();
    let store = SessionTodoStore::new(&mut session);

    let output = list_todo_lists(&store, "json").await.unwrap();
    let parsed: Vec<TodoList> = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].title, "Home");
}

#[tokio::test]
async fn list_rejects_unknown_format() {
    let mut session = session();
    let store = SessionTodoStore::new(&mut session);

    let result = list_todo_lists(&store, "xml").await;
    assert!(matches!(result, Err(CliError::UnsupportedFormat { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_reports_duplicates_on_sqlite() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.init_schema().await.unwrap();
    let mut store = db.todo_store("admin");

    let first = create_todo_list(&mut store, "Garden").await.unwrap();
    let second = create_todo_list(&mut store, "Garden").await.unwrap();

    assert!(first.starts_with("Created todo list"));
    assert_eq!(second, "A todo list titled 'Garden' already exists");
    assert!(store.exists_todo_list_title("Garden").await.unwrap());
}

#[tokio::test]
async fn rename_and_delete_missing_list_is_not_found() {
    let mut session = session();
    let mut store = SessionTodoStore::new(&mut session);

    assert!(matches!(
        rename_todo_list(&mut store, 99, "x").await,
        Err(CliError::NotFound { .. })
    ));
    assert!(matches!(
        delete_todo_list(&mut store, 99).await,
        Err(CliError::NotFound { .. })
    ));
    assert!(matches!(
        complete_todo_list(&mut store, 99).await,
        Err(CliError::NotFound { .. })
    ));
}

#[tokio::test]
async fn rename_to_taken_title_is_reported() {
    let mut session = session();
    let mut store = SessionTodoStore::new(&mut session);

    let output = rename_todo_list(&mut store, 2, "Work").await.unwrap();
    assert_eq!(output, "A todo list titled 'Work' already exists");

    let output = rename_todo_list(&mut store, 2, "House").await.unwrap();
    assert_eq!(output, "Renamed todo list 2 to 'House'");
}
