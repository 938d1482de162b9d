//! Session TodoStore implementation.

use tracing::{debug, instrument};

use crate::db::{
    DbError, DbResult, Id, Session, Todo, TodoList, TodoStore,
    seed::seed_todo_lists,
    sort::{sort_todo_lists, sort_todos},
    utils::next_id,
};

/// Todo store over the lists held in a [`Session`].
///
/// Reads hand out clones; only the private `find_*` helpers touch the live
/// lists.
pub struct SessionTodoStore<'a> {
    todo_lists: &'a mut Vec<TodoList>,
    username: String,
}

impl<'a> SessionTodoStore<'a> {
    /// Bind a store to `session`, seeding it with demonstration data if it
    /// has no todo lists yet.
    pub fn new(session: &'a mut Session) -> Self {
        let username = session.username.clone();
        let todo_lists = session.todo_lists.get_or_insert_with(|| {
            debug!(username = %username, "seeding session with demonstration todo lists");
            seed_todo_lists(&username)
        });

        Self {
            todo_lists,
            username,
        }
    }

    // Live references: callers must not hand these out.
    fn find_todo_list(&self, todo_list_id: Id) -> Option<&TodoList> {
        self.todo_lists.iter().find(|l| l.id == todo_list_id)
    }

    fn find_todo_list_mut(&mut self, todo_list_id: Id) -> Option<&mut TodoList> {
        self.todo_lists.iter_mut().find(|l| l.id == todo_list_id)
    }

    fn find_todo_mut(&mut self, todo_list_id: Id, todo_id: Id) -> Option<&mut Todo> {
        self.find_todo_list_mut(todo_list_id)?
            .todos
            .iter_mut()
            .find(|t| t.id == todo_id)
    }

    fn title_taken(&self, title: &str, except: Option<Id>) -> bool {
        self.todo_lists
            .iter()
            .any(|l| l.title == title && Some(l.id) != except)
    }
}

impl<'a> TodoStore for SessionTodoStore<'a> {
    async fn sorted_todo_lists(&self) -> DbResult<Vec<TodoList>> {
        Ok(sort_todo_lists(self.todo_lists.clone()))
    }

    async fn sorted_todos(&self, todo_list: &TodoList) -> DbResult<Vec<Todo>> {
        Ok(sort_todos(todo_list.todos.clone()))
    }

    async fn load_todo_list(&self, todo_list_id: Id) -> DbResult<Option<TodoList>> {
        Ok(self.find_todo_list(todo_list_id).cloned())
    }

    async fn load_todo(&self, todo_list_id: Id, todo_id: Id) -> DbResult<Option<Todo>> {
        Ok(self
            .find_todo_list(todo_list_id)
            .and_then(|l| l.todos.iter().find(|t| t.id == todo_id))
            .cloned())
    }

    #[instrument(skip(self))]
    async fn toggle_todo_done_status(&mut self, todo_list_id: Id, todo_id: Id) -> DbResult<bool> {
        let Some(todo) = self.find_todo_mut(todo_list_id, todo_id) else {
            return Ok(false);
        };
        todo.done = !todo.done;
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn delete_todo(&mut self, todo_list_id: Id, todo_id: Id) -> DbResult<bool> {
        let Some(todo_list) = self.find_todo_list_mut(todo_list_id) else {
            return Ok(false);
        };
        let Some(index) = todo_list.todos.iter().position(|t| t.id == todo_id) else {
            return Ok(false);
        };
        todo_list.todos.remove(index);
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn mark_all_todos_done(&mut self, todo_list_id: Id) -> DbResult<bool> {
        let Some(todo_list) = self.find_todo_list_mut(todo_list_id) else {
            return Ok(false);
        };
        todo_list
            .todos
            .iter_mut()
            .filter(|t| !t.done)
            .for_each(|t| t.done = true);
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn add_todo(&mut self, todo_list_id: Id, title: &str) -> DbResult<bool> {
        let username = self.username.clone();
        let Some(todo_list) = self.find_todo_list_mut(todo_list_id) else {
            return Ok(false);
        };
        todo_list.todos.push(Todo {
            id: next_id(),
            title: title.to_string(),
            done: false,
            todolist_id: todo_list_id,
            username,
        });
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn delete_todo_list(&mut self, todo_list_id: Id) -> DbResult<bool> {
        let Some(index) = self.todo_lists.iter().position(|l| l.id == todo_list_id) else {
            return Ok(false);
        };
        self.todo_lists.remove(index);
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn set_title_todo_list(&mut self, todo_list_id: Id, title: &str) -> DbResult<bool> {
        if self.title_taken(title, Some(todo_list_id)) {
            debug!("title already used by another list");
            return Ok(false);
        }
        let Some(todo_list) = self.find_todo_list_mut(todo_list_id) else {
            return Ok(false);
        };
        todo_list.title = title.to_string();
        Ok(true)
    }

    async fn exists_todo_list_title(&self, title: &str) -> DbResult<bool> {
        Ok(self.title_taken(title, None))
    }

    #[instrument(skip(self))]
    async fn create_todo_list(&mut self, title: &str) -> DbResult<Option<Id>> {
        if self.title_taken(title, None) {
            debug!("title already used by another list");
            return Ok(None);
        }
        let id = next_id();
        self.todo_lists.push(TodoList {
            id,
            title: title.to_string(),
            username: self.username.clone(),
            todos: Vec::new(),
        });
        Ok(Some(id))
    }

    fn is_unique_constraint_violation(&self, _error: &DbError) -> bool {
        false
    }
}
