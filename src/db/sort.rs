//! Ordering helpers shared by both stores.

use std::cmp::Ordering;

use crate::db::models::{Todo, TodoList};

/// Case-insensitive title comparison.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable partition: not-done lists first, done lists after, relative order kept.
pub fn partition_todo_lists(todo_lists: Vec<TodoList>) -> Vec<TodoList> {
    let (done, mut undone): (Vec<_>, Vec<_>) =
        todo_lists.into_iter().partition(TodoList::is_done);
    undone.extend(done);
    undone
}

/// Order lists by title, then move done lists behind not-done ones.
pub fn sort_todo_lists(mut todo_lists: Vec<TodoList>) -> Vec<TodoList> {
    todo_lists.sort_by(|a, b| compare_titles(&a.title, &b.title));
    partition_todo_lists(todo_lists)
}

/// Not-done todos first, then done todos, each group ordered by title.
pub fn sort_todos(mut todos: Vec<Todo>) -> Vec<Todo> {
    todos.sort_by(|a, b| a.done.cmp(&b.done).then_with(|| compare_titles(&a.title, &b.title)));
    todos
}
