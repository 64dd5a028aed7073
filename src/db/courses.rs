//! Course catalog repository: courses and the lessons/quizzes they own
//!
//! The catalog is read-only at runtime; rows come from the demo seed or
//! from operator tooling. There are no delete endpoints, so no cascade
//! semantics are implemented here.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{Course, Lesson, Quiz};

pub async fn all(pool: &SqlitePool) -> Result<Vec<Course>> {
    let courses =
        sqlx::query_as::<_, Course>("SELECT id, title, description FROM courses ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(courses)
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Course>> {
    let course =
        sqlx::query_as::<_, Course>("SELECT id, title, description FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(course)
}

pub async fn lessons_for(pool: &SqlitePool, course_id: i64) -> Result<Vec<Lesson>> {
    let lessons = sqlx::query_as::<_, Lesson>(
        "SELECT id, course_id, title, content FROM lessons WHERE course_id = ? ORDER BY id",
    )
    .bind(course_id)
    .fetch_all(pool)
    .await?;
    Ok(lessons)
}

pub async fn find_lesson(pool: &SqlitePool, id: i64) -> Result<Option<Lesson>> {
    let lesson = sqlx::query_as::<_, Lesson>(
        "SELECT id, course_id, title, content FROM lessons WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(lesson)
}

pub async fn quizzes_for(pool: &SqlitePool, course_id: i64) -> Result<Vec<Quiz>> {
    let quizzes = sqlx::query_as::<_, Quiz>(
        "SELECT id, course_id, title, question, correct_answer \
         FROM quizzes WHERE course_id = ? ORDER BY id",
    )
    .bind(course_id)
    .fetch_all(pool)
    .await?;
    Ok(quizzes)
}

pub async fn find_quiz(pool: &SqlitePool, id: i64) -> Result<Option<Quiz>> {
    let quiz = sqlx::query_as::<_, Quiz>(
        "SELECT id, course_id, title, question, correct_answer FROM quizzes WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(quiz)
}
