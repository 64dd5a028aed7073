use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;
use serde::Deserialize;
use tower_cookies::Cookies;

use crate::db::{courses, enrollments};
use crate::error::{AppError, Result};
use crate::flash::FlashLevel;
use crate::models::{Quiz, User};
use crate::{flash, session, views, AppState};

#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    pub answer: String,
}

/// GET /quizzes/:id/take — show the question
pub async fn show_quiz(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(quiz_id): Path<i64>,
) -> Result<Markup> {
    let (user, quiz) = load_quiz_for(&state, &cookies, quiz_id).await?;
    let notice = flash::take(&cookies);
    Ok(views::courses::take_quiz(&user, notice, &quiz, None))
}

/// POST /quizzes/:id/take — grade the submitted answer
///
/// Evaluation is stateless: only the transient verdict is surfaced as a
/// notice on the quiz list. No attempt or score is persisted. A blank
/// submission is a validation failure, not a wrong answer: the form is
/// re-rendered and nothing about the stored answer is revealed.
pub async fn submit_quiz(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(quiz_id): Path<i64>,
    Form(form): Form<AnswerForm>,
) -> Result<Response> {
    let (user, quiz) = load_quiz_for(&state, &cookies, quiz_id).await?;

    if form.answer.trim().is_empty() {
        return Ok(
            views::courses::take_quiz(&user, None, &quiz, Some("Please enter an answer."))
                .into_response(),
        );
    }

    if quiz.check_answer(&form.answer) {
        flash::set(
            &cookies,
            FlashLevel::Success,
            &format!("Correct! You passed the quiz: \"{}\".", quiz.title),
        );
    } else {
        flash::set(
            &cookies,
            FlashLevel::Danger,
            &format!("Wrong answer. The correct answer is \"{}\".", quiz.correct_answer),
        );
    }

    Ok(Redirect::to(&format!("/courses/{}/quizzes", quiz.course_id)).into_response())
}

/// Shared gate for both quiz handlers: session, lookup, enrollment
async fn load_quiz_for(
    state: &AppState,
    cookies: &Cookies,
    quiz_id: i64,
) -> Result<(User, Quiz)> {
    let user = session::require_user(&state.pool, cookies).await?;
    let quiz = courses::find_quiz(&state.pool, quiz_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !enrollments::is_enrolled(&state.pool, user.id, quiz.course_id).await? {
        return Err(AppError::NotEnrolled(
            "You must enroll in this course to take quizzes.",
        ));
    }

    Ok((user, quiz))
}
