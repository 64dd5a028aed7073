use axum::{
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use maud::{html, Markup};
use thiserror::Error;

use crate::flash::{self, FlashLevel};

/// Application error type
///
/// Validation failures and registration conflicts are recovered inside the
/// handlers (the form is re-rendered with a message), so they never reach
/// this type. Everything here terminates the request: either with a redirect
/// carrying a notice, or with an error page.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found")]
    NotFound,

    #[error("Login required")]
    Unauthenticated,

    #[error("Not enrolled in course")]
    NotEnrolled(&'static str),
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_page("Something went wrong", "Please try again later."),
                )
                    .into_response()
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                error_page("Not found", "The page you requested does not exist."),
            )
                .into_response(),
            AppError::Unauthenticated => redirect_with_notice(
                "/login",
                FlashLevel::Danger,
                "Please log in to access this page.",
            ),
            AppError::NotEnrolled(notice) => {
                redirect_with_notice("/dashboard", FlashLevel::Danger, notice)
            }
        }
    }
}

/// Redirect carrying a one-shot flash notice.
///
/// Errors are converted outside the handler, where the cookie jar is no
/// longer reachable, so the flash cookie is written as a raw header here.
fn redirect_with_notice(location: &str, level: FlashLevel, message: &str) -> Response {
    let mut response = Redirect::to(location).into_response();
    let header = format!(
        "{}={}; Path=/",
        flash::FLASH_COOKIE,
        flash::cookie_value(level, message)
    );
    if let Ok(value) = HeaderValue::from_str(&header) {
        response.headers_mut().append(SET_COOKIE, value);
    }
    response
}

fn error_page(title: &str, detail: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        html {
            head { title { (title) } }
            body {
                h1 { (title) }
                p { (detail) }
                p { a href="/" { "Back to courses" } }
            }
        }
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
