use std::collections::HashMap;

use maud::{html, Markup};

use crate::flash::Flash;
use crate::models::{Course, Lesson, Progress, Quiz, User};
use crate::views::layout;

/// Lesson list with per-lesson completion state
pub fn lessons(
    user: &User,
    flash: Option<Flash>,
    course: &Course,
    lessons: &[Lesson],
    progress: &HashMap<i64, Progress>,
) -> Markup {
    let content = html! {
        h1 { (course.title) ": lessons" }
        @if lessons.is_empty() {
            p { "This course has no lessons yet." }
        }
        @for lesson in lessons {
            section {
                h2 { (lesson.title) }
                p { (lesson.content) }
                @if progress.get(&lesson.id).map(|p| p.completed).unwrap_or(false) {
                    p { em { "Completed" } }
                } @else {
                    form method="POST" action=(format!("/lessons/{}/complete", lesson.id)) {
                        button type="submit" { "Mark as completed" }
                    }
                }
            }
        }
        p { a href="/dashboard" { "Back to dashboard" } }
    };
    layout(&course.title, Some(user), flash, content)
}

/// Quiz list for a course
pub fn quizzes(user: &User, flash: Option<Flash>, course: &Course, quizzes: &[Quiz]) -> Markup {
    let content = html! {
        h1 { (course.title) ": quizzes" }
        @if quizzes.is_empty() {
            p { "This course has no quizzes yet." }
        } @else {
            ul {
                @for quiz in quizzes {
                    li {
                        a href=(format!("/quizzes/{}/take", quiz.id)) { (quiz.title) }
                    }
                }
            }
        }
        p { a href="/dashboard" { "Back to dashboard" } }
    };
    layout(&course.title, Some(user), flash, content)
}

/// Single-question quiz form; `error` re-displays a validation message
pub fn take_quiz(user: &User, flash: Option<Flash>, quiz: &Quiz, error: Option<&str>) -> Markup {
    let content = html! {
        h1 { (quiz.title) }
        p { (quiz.question) }
        @if let Some(error) = error {
            p class="notice notice-danger" { (error) }
        }
        form method="POST" action=(format!("/quizzes/{}/take", quiz.id)) {
            input name="answer" type="text" placeholder="Your answer" required;
            button type="submit" { "Submit answer" }
        }
    };
    layout(&quiz.title, Some(user), flash, content)
}
