//! Enrollment repository: the authorization predicate for course content
//!
//! Every lesson/quiz-scoped handler re-checks [`is_enrolled`]; membership
//! is never cached on the session.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{Course, Enrollment};

/// Outcome of an enrollment attempt
#[derive(Debug, Clone)]
pub enum EnrollOutcome {
    Enrolled(Enrollment),
    AlreadyEnrolled,
}

/// Enroll a user in a course, idempotently
///
/// Find-or-create in a single statement: the UNIQUE constraint on
/// (user_id, course_id) absorbs concurrent double-submits. No returned
/// row means the membership already existed.
pub async fn enroll(pool: &SqlitePool, user_id: i64, course_id: i64) -> Result<EnrollOutcome> {
    let created = sqlx::query_as::<_, Enrollment>(
        "INSERT INTO enrollments (user_id, course_id) VALUES (?, ?) \
         ON CONFLICT (user_id, course_id) DO NOTHING \
         RETURNING id, user_id, course_id",
    )
    .bind(user_id)
    .bind(course_id)
    .fetch_optional(pool)
    .await?;

    match created {
        Some(enrollment) => {
            tracing::info!(user_id, course_id, "user enrolled in course");
            Ok(EnrollOutcome::Enrolled(enrollment))
        }
        None => Ok(EnrollOutcome::AlreadyEnrolled),
    }
}

/// The single authorization predicate for lesson and quiz access
pub async fn is_enrolled(pool: &SqlitePool, user_id: i64, course_id: i64) -> Result<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM enrollments WHERE user_id = ? AND course_id = ?",
    )
    .bind(user_id)
    .bind(course_id)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

/// Courses the user is enrolled in, for the dashboard
pub async fn courses_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Course>> {
    let courses = sqlx::query_as::<_, Course>(
        "SELECT c.id, c.title, c.description \
         FROM courses c JOIN enrollments e ON e.course_id = c.id \
         WHERE e.user_id = ? ORDER BY c.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(courses)
}
