use serde::{Deserialize, Serialize};

/// A registered account
///
/// `password_hash` holds the salted one-way hash produced by
/// [`crate::security::hash_password`]; the plaintext is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    /// When the account was created (Unix timestamp)
    pub created_at: i64,
}
