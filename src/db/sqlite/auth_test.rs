//! Tests for user registration and authentication.

use crate::db::{Authenticator, DbError, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.init_schema().await.expect("Schema should apply");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn authenticate_accepts_correct_password() {
    let db = setup_db().await;
    assert!(db.create_user("admin", "secret").await.unwrap());

    // The store's own user does not matter: the username is explicit.
    let store = db.todo_store("someone-else");
    assert!(store.authenticate("admin", "secret").await.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn authenticate_rejects_wrong_password_and_unknown_user() {
    let db = setup_db().await;
    db.create_user("admin", "secret").await.unwrap();
    let store = db.todo_store("admin");

    assert!(!store.authenticate("admin", "Secret").await.unwrap());
    assert!(!store.authenticate("nobody", "secret").await.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_stored_hash_fails_closed() {
    let db = setup_db().await;
    sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind("legacy")
        .bind("plaintext-password")
        .execute(db.pool())
        .await
        .unwrap();

    let store = db.todo_store("legacy");
    assert!(!store.authenticate("legacy", "plaintext-password").await.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn passwords_are_stored_hashed() {
    let db = setup_db().await;
    db.create_user("admin", "secret").await.unwrap();

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE username = ?")
        .bind("admin")
        .fetch_one(db.pool())
        .await
        .unwrap();

    assert_ne!(stored, "secret");
    assert!(stored.starts_with("$argon2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_user_is_refused() {
    let db = setup_db().await;
    assert!(db.create_user("admin", "secret").await.unwrap());
    assert!(!db.create_user("admin", "other").await.unwrap());

    let store = db.todo_store("admin");
    assert!(store.authenticate("admin", "secret").await.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_credentials_are_rejected() {
    let db = setup_db().await;

    let result = db.create_user("", "secret").await;
    assert!(matches!(result, Err(DbError::Validation { .. })));

    let result = db.create_user("admin", "").await;
    assert!(matches!(result, Err(DbError::Validation { .. })));
}
