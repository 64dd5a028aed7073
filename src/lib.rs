//! CourseHub library
//!
//! Exports the application state, router and core types so integration
//! tests can drive the real router without a listening socket.

pub mod config;
pub mod db;
pub mod error;
pub mod flash;
pub mod models;
pub mod routes;
pub mod security;
pub mod session;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{AppError, Result};

/// Application state shared across all handlers
///
/// Constructed once at startup and injected into every handler through
/// axum's state extractor; there is no ambient global.
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::SqlitePool,
    pub config: Config,
}

impl AppState {
    pub fn new(pool: sqlx::SqlitePool, config: Config) -> Self {
        Self { pool, config }
    }
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    use routes::*;

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/dashboard", get(dashboard))
        .route("/courses/:course_id/lessons", get(view_lessons))
        .route("/courses/:course_id/quizzes", get(view_quizzes))
        .route("/courses/:course_id/enroll", get(enroll))
        .route("/lessons/:lesson_id/complete", post(complete_lesson))
        .route("/quizzes/:quiz_id/take", get(show_quiz).post(submit_quiz))
        .route("/register", get(show_register).post(create_account))
        .route("/login", get(show_login).post(login))
        .route("/logout", get(logout))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
