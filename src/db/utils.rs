//! Database utility functions.

use std::sync::atomic::{AtomicI64, Ordering};

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::db::{DbError, DbResult, Id};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Generate a process-unique integer ID for in-memory entities.
pub fn next_id() -> Id {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Hash a plaintext password into an argon2 PHC string.
pub fn hash_password(password: &str) -> DbResult<String> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| DbError::Credential {
        message: format!("Failed to encode salt: {}", e),
    })?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbError::Credential {
            message: format!("Failed to hash password: {}", e),
        })
}

/// Check a plaintext password against a stored PHC string.
///
/// The comparison inside argon2 is constant-time.
pub fn verify_password(password: &str, stored_hash: &str) -> DbResult<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| DbError::Credential {
        message: format!("Stored password hash is malformed: {}", e),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
