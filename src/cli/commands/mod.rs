pub mod todo;
pub mod todo_list;
pub mod user;

#[cfg(test)]
mod todo_list_test;
#[cfg(test)]
mod user_test;
