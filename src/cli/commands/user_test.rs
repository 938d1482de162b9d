use crate::cli::commands::user::*;
use crate::cli::error::CliError;
use crate::db::{DbError, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.init_schema().await.unwrap();
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn add_user_then_login() {
    let db = setup_db().await;

    assert_eq!(add_user(&db, "admin", "secret").await.unwrap(), "Created user admin");
    assert_eq!(
        add_user(&db, "admin", "secret").await.unwrap(),
        "User admin already exists"
    );
    assert_eq!(login(&db, "admin", "secret").await.unwrap(), "Authenticated as admin");
}

#[tokio::test(flavor = "multi_thread")]
async fn login_with_bad_credentials_is_an_error() {
    let db = setup_db().await;
    add_user(&db, "admin", "secret").await.unwrap();

    let wrong_password = login(&db, "admin", "nope").await;
    assert!(matches!(
        wrong_password,
        Err(CliError::InvalidCredentials { ref username }) if username == "admin"
    ));

    let unknown_user = login(&db, "ghost", "secret").await;
    assert!(matches!(
        unknown_user,
        Err(CliError::InvalidCredentials { .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn add_user_with_empty_password_fails() {
    let db = setup_db().await;

    let result = add_user(&db, "admin", "").await;
    assert!(matches!(
        result,
        Err(CliError::Database(DbError::Validation { .. }))
    ));
}
