//! Demonstration data for fresh sessions.

use std::sync::LazyLock;

use crate::db::{
    models::{Todo, TodoList},
    utils::next_id,
};

/// Owner recorded on the static seed before it is stamped for a session.
pub const SEED_USERNAME: &str = "demo";

static SEED_TODO_LISTS: LazyLock<Vec<TodoList>> = LazyLock::new(|| {
    vec![
        seed_list(
            "Work Todos",
            &[("Get coffee", true), ("Chat with co-workers", true), ("Duck out of meeting", false)],
        ),
        seed_list(
            "Home Todos",
            &[("Feed the cats", true), ("Go to bed", true), ("Buy milk", true), ("Study for Launch School", true)],
        ),
        seed_list("Additional Todos", &[]),
        seed_list("social todos", &[("Go to Libby's birthday party", false)]),
    ]
});

fn seed_list(title: &str, todos: &[(&str, bool)]) -> TodoList {
    let id = next_id();
    TodoList {
        id,
        title: title.to_string(),
        username: SEED_USERNAME.to_string(),
        todos: todos
            .iter()
            .map(|(todo_title, done)| Todo {
                id: next_id(),
                title: todo_title.to_string(),
                done: *done,
                todolist_id: id,
                username: SEED_USERNAME.to_string(),
            })
            .collect(),
    }
}

/// A deep copy of the seed, owned by `username`.
pub fn seed_todo_lists(username: &str) -> Vec<TodoList> {
    let mut todo_lists = SEED_TODO_LISTS.clone();
    for todo_list in &mut todo_lists {
        todo_list.username = username.to_string();
        for todo in &mut todo_list.todos {
            todo.username = username.to_string();
        }
    }
    todo_lists
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_copies_are_independent() {
        let mut first = seed_todo_lists("alice");
        first[0].title = "changed".to_string();

        let second = seed_todo_lists("bob");
        assert_eq!(second[0].title, "Work Todos");
    }

    #[test]
    fn seed_is_stamped_with_username() {
        let lists = seed_todo_lists("alice");
        assert!(lists.iter().all(|l| l.username == "alice"));
        assert!(
            lists
                .iter()
                .flat_map(|l| &l.todos)
                .all(|t| t.username == "alice")
        );
    }

    #[test]
    fn seed_todos_point_at_their_list() {
        for list in seed_todo_lists("alice") {
            assert!(list.todos.iter().all(|t| t.todolist_id == list.id));
        }
    }

    #[test]
    fn seed_ids_are_stable_across_copies() {
        let a: Vec<_> = seed_todo_lists("alice").iter().map(|l| l.id).collect();
        let b: Vec<_> = seed_todo_lists("bob").iter().map(|l| l.id).collect();
        assert_eq!(a, b);
    }
}
