//! Registration, login and logout
//!
//! Validation failures and duplicate registrations are recovered locally:
//! the form is re-rendered with a message instead of raising an error.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_cookies::Cookies;

use crate::db::users;
use crate::error::Result;
use crate::flash::FlashLevel;
use crate::{flash, security, session, views, AppState};

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /register
pub async fn show_register(cookies: Cookies) -> Response {
    let notice = flash::take(&cookies);
    views::auth::register(notice, None).into_response()
}

/// POST /register — create an account
///
/// Only the password hash is stored, never the plaintext. Duplicate
/// usernames and emails are reported back on the form; the UNIQUE
/// constraints in the store back these checks against races.
pub async fn create_account(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    if let Some(message) = validate_registration(&form) {
        return Ok(views::auth::register(None, Some(message)).into_response());
    }

    if users::find_by_username(&state.pool, form.username.trim())
        .await?
        .is_some()
    {
        return Ok(views::auth::register(None, Some("That username is already taken.")).into_response());
    }
    if users::find_by_email(&state.pool, form.email.trim())
        .await?
        .is_some()
    {
        return Ok(
            views::auth::register(None, Some("That email is already registered.")).into_response(),
        );
    }

    let password_hash = security::hash_password(&form.password);
    let user_id = users::create(
        &state.pool,
        form.username.trim(),
        form.email.trim(),
        &password_hash,
    )
    .await?;
    tracing::info!(user_id, "new user registered");

    flash::set(
        &cookies,
        FlashLevel::Success,
        "Registration successful! Please log in.",
    );
    Ok(Redirect::to("/login").into_response())
}

/// GET /login
pub async fn show_login(cookies: Cookies) -> Response {
    let notice = flash::take(&cookies);
    views::auth::login(notice, None).into_response()
}

/// POST /login — verify credentials and establish a session
///
/// A wrong email and a wrong password produce the same message; the form
/// does not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let user = users::find_by_email(&state.pool, form.email.trim()).await?;

    let user = match user {
        Some(user) if security::verify_password(&form.password, &user.password_hash) => user,
        _ => {
            tracing::debug!("failed login attempt");
            return Ok(views::auth::login(None, Some("Invalid email or password.")).into_response());
        }
    };

    let token = security::new_session_token();
    session::start(&state.pool, &cookies, user.id, token).await?;
    tracing::info!(user_id = user.id, "user logged in");

    flash::set(&cookies, FlashLevel::Success, "Login successful!");
    Ok(Redirect::to("/dashboard").into_response())
}

/// GET /logout — invalidate the session
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> Result<Redirect> {
    let user = session::require_user(&state.pool, &cookies).await?;
    session::end(&state.pool, &cookies).await?;
    tracing::info!(user_id = user.id, "user logged out");

    flash::set(&cookies, FlashLevel::Success, "Logged out successfully.");
    Ok(Redirect::to("/"))
}

fn validate_registration(form: &RegisterForm) -> Option<&'static str> {
    if form.username.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Some("All fields are required.");
    }
    // Coarse shape check only; real deliverability is out of scope
    let email = form.email.trim();
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Some("Enter a valid email address.");
    }
    if form.password != form.confirm_password {
        return Some("Passwords must match.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_validate_registration_accepts_complete_form() {
        assert!(validate_registration(&form("alice", "alice@x.com", "pw123", "pw123")).is_none());
    }

    #[test]
    fn test_validate_registration_requires_all_fields() {
        assert!(validate_registration(&form("", "alice@x.com", "pw", "pw")).is_some());
        assert!(validate_registration(&form("alice", "  ", "pw", "pw")).is_some());
        assert!(validate_registration(&form("alice", "alice@x.com", "", "")).is_some());
    }

    #[test]
    fn test_validate_registration_email_shape() {
        assert!(validate_registration(&form("alice", "not-an-email", "pw", "pw")).is_some());
        assert!(validate_registration(&form("alice", "@x.com", "pw", "pw")).is_some());
        assert!(validate_registration(&form("alice", "alice@", "pw", "pw")).is_some());
    }

    #[test]
    fn test_validate_registration_password_confirmation() {
        assert_eq!(
            validate_registration(&form("alice", "alice@x.com", "pw1", "pw2")),
            Some("Passwords must match.")
        );
    }
}
