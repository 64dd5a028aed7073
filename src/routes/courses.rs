//! Course-scoped pages: lesson list, quiz list, enrollment
//!
//! Every handler here runs the same gate order: session, then lookup, then
//! the enrollment check. A failed enrollment check is a soft fail that
//! redirects to the dashboard with a notice; it never reaches the action.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use maud::Markup;
use tower_cookies::Cookies;

use crate::db::{courses, enrollments, progress};
use crate::db::enrollments::EnrollOutcome;
use crate::error::{AppError, Result};
use crate::flash::FlashLevel;
use crate::{flash, session, views, AppState};

/// GET /courses/:id/lessons — lessons with completion state
pub async fn view_lessons(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(course_id): Path<i64>,
) -> Result<Markup> {
    let user = session::require_user(&state.pool, &cookies).await?;
    let course = courses::find(&state.pool, course_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !enrollments::is_enrolled(&state.pool, user.id, course.id).await? {
        return Err(AppError::NotEnrolled(
            "You must enroll in this course to view its lessons.",
        ));
    }

    let lessons = courses::lessons_for(&state.pool, course.id).await?;
    // One bulk lookup for the whole page, keyed by lesson id
    let completion = progress::for_course(&state.pool, user.id, course.id).await?;
    let notice = flash::take(&cookies);

    Ok(views::courses::lessons(
        &user, notice, &course, &lessons, &completion,
    ))
}

/// GET /courses/:id/quizzes — quiz list
pub async fn view_quizzes(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(course_id): Path<i64>,
) -> Result<Markup> {
    let user = session::require_user(&state.pool, &cookies).await?;
    let course = courses::find(&state.pool, course_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !enrollments::is_enrolled(&state.pool, user.id, course.id).await? {
        return Err(AppError::NotEnrolled(
            "You must enroll in this course to view its quizzes.",
        ));
    }

    let quizzes = courses::quizzes_for(&state.pool, course.id).await?;
    let notice = flash::take(&cookies);

    Ok(views::courses::quizzes(&user, notice, &course, &quizzes))
}

/// GET /courses/:id/enroll — create (or confirm) a membership
///
/// Idempotent: re-enrolling reports "already enrolled" instead of erroring
/// or creating a duplicate row.
pub async fn enroll(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(course_id): Path<i64>,
) -> Result<Redirect> {
    let user = session::require_user(&state.pool, &cookies).await?;
    let course = courses::find(&state.pool, course_id)
        .await?
        .ok_or(AppError::NotFound)?;

    match enrollments::enroll(&state.pool, user.id, course.id).await? {
        EnrollOutcome::Enrolled(_) => flash::set(
            &cookies,
            FlashLevel::Success,
            &format!("Enrolled in {}!", course.title),
        ),
        EnrollOutcome::AlreadyEnrolled => flash::set(
            &cookies,
            FlashLevel::Info,
            &format!("You are already enrolled in {}!", course.title),
        ),
    }

    Ok(Redirect::to("/dashboard"))
}
