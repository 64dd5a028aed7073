//! Server-side login sessions
//!
//! A session row is the proof that a browser holding its token has
//! authenticated. Rows are created at login and deleted at logout; the
//! token itself lives in a cookie on the client.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::User;

pub async fn create(pool: &SqlitePool, token: &str, user_id: i64) -> Result<()> {
    let created_at = chrono::Utc::now().timestamp();
    sqlx::query("INSERT INTO sessions (token, user_id, created_at) VALUES (?, ?, ?)")
        .bind(token)
        .bind(user_id)
        .bind(created_at)
        .execute(pool)
        .await?;
    Ok(())
}

/// Resolve a session token to its user, or None for unknown/stale tokens
pub async fn user_for_token(pool: &SqlitePool, token: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT u.id, u.username, u.email, u.password_hash, u.created_at \
         FROM sessions s JOIN users u ON u.id = s.user_id \
         WHERE s.token = ?",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn delete(pool: &SqlitePool, token: &str) -> Result<()> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}
