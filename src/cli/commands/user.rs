//! User administration commands.

use crate::cli::error::{CliError, CliResult};
use crate::db::{Authenticator, SqliteDatabase};

pub async fn add_user(db: &SqliteDatabase, username: &str, password: &str) -> CliResult<String> {
    if db.create_user(username, password).await? {
        Ok(format!("Created user {}", username))
    } else {
        Ok(format!("User {} already exists", username))
    }
}

pub async fn login(db: &SqliteDatabase, username: &str, password: &str) -> CliResult<String> {
    let store = db.todo_store(username);
    if store.authenticate(username, password).await? {
        Ok(format!("Authenticated as {}", username))
    } else {
        Err(CliError::InvalidCredentials {
            username: username.to_string(),
        })
    }
}
