use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tower_cookies::Cookies;

use crate::db::{courses, enrollments, progress};
use crate::error::{AppError, Result};
use crate::flash::FlashLevel;
use crate::{flash, session, AppState};

/// POST /lessons/:id/complete — record lesson completion
///
/// The enrollment gate runs against the lesson's owning course before the
/// write. The write itself is an upsert, so double-submitting the form has
/// no additional effect.
pub async fn complete_lesson(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(lesson_id): Path<i64>,
) -> Result<Redirect> {
    let user = session::require_user(&state.pool, &cookies).await?;
    let lesson = courses::find_lesson(&state.pool, lesson_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !enrollments::is_enrolled(&state.pool, user.id, lesson.course_id).await? {
        return Err(AppError::NotEnrolled(
            "You must enroll in this course to mark lessons as completed.",
        ));
    }

    progress::mark_complete(&state.pool, user.id, lesson.id).await?;

    flash::set(
        &cookies,
        FlashLevel::Success,
        &format!("Marked \"{}\" as completed!", lesson.title),
    );
    Ok(Redirect::to(&format!(
        "/courses/{}/lessons",
        lesson.course_id
    )))
}
