//! Session resolution for request handlers
//!
//! The session token is an explicit input: handlers pull it out of the
//! cookie jar once, at the top of the request, and resolve it to a user
//! record. There is no ambient current-user state anywhere else.

use sqlx::SqlitePool;
use tower_cookies::{Cookie, Cookies};

use crate::db::sessions;
use crate::error::{AppError, Result};
use crate::models::User;

pub const SESSION_COOKIE: &str = "session";

/// Resolve the session cookie to a user, if any
///
/// Unknown or stale tokens are treated the same as no cookie at all.
pub async fn current_user(pool: &SqlitePool, cookies: &Cookies) -> Result<Option<User>> {
    let token = match cookies.get(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return Ok(None),
    };
    sessions::user_for_token(pool, &token).await
}

/// Resolve the session or fail the request with a redirect to login
pub async fn require_user(pool: &SqlitePool, cookies: &Cookies) -> Result<User> {
    current_user(pool, cookies)
        .await?
        .ok_or(AppError::Unauthenticated)
}

/// Persist a new session and hand its token to the browser
pub async fn start(pool: &SqlitePool, cookies: &Cookies, user_id: i64, token: String) -> Result<()> {
    sessions::create(pool, &token, user_id).await?;

    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookies.add(cookie);
    Ok(())
}

/// Invalidate the current session, server side and in the browser
pub async fn end(pool: &SqlitePool, cookies: &Cookies) -> Result<()> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        sessions::delete(pool, cookie.value()).await?;
    }

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    cookies.remove(removal);
    Ok(())
}
