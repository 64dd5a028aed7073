//! Progress repository: per-user, per-lesson completion state

use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::Progress;

/// Record that a user finished a lesson
///
/// Upsert on (user_id, lesson_id): the first write creates the row,
/// subsequent writes set completed again. Marking twice is a no-op, not
/// an error, and concurrent marks converge on the uniqueness constraint.
pub async fn mark_complete(pool: &SqlitePool, user_id: i64, lesson_id: i64) -> Result<()> {
    sqlx::query(
        "INSERT INTO progress (user_id, lesson_id, completed) VALUES (?, ?, 1) \
         ON CONFLICT (user_id, lesson_id) DO UPDATE SET completed = 1",
    )
    .bind(user_id)
    .bind(lesson_id)
    .execute(pool)
    .await?;

    tracing::debug!(user_id, lesson_id, "lesson marked complete");
    Ok(())
}

/// Bulk completion lookup for one course view
///
/// Fetches the user's progress for every lesson of the course in a single
/// query and keys it by lesson id, so rendering the lesson list does not
/// issue one lookup per lesson.
pub async fn for_course(
    pool: &SqlitePool,
    user_id: i64,
    course_id: i64,
) -> Result<HashMap<i64, Progress>> {
    let rows = sqlx::query_as::<_, Progress>(
        "SELECT p.id, p.user_id, p.lesson_id, p.completed \
         FROM progress p JOIN lessons l ON l.id = p.lesson_id \
         WHERE p.user_id = ? AND l.course_id = ?",
    )
    .bind(user_id)
    .bind(course_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|p| (p.lesson_id, p)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{courses, seed, test_pool, users};

    async fn setup() -> (SqlitePool, i64, i64, i64) {
        let pool = test_pool().await;
        seed::seed_demo_data(&pool).await.unwrap();
        let user_id = users::create(&pool, "alice", "alice@x.com", "hash")
            .await
            .unwrap();
        let course_id = courses::all(&pool).await.unwrap()[0].id;
        let lesson_id = courses::lessons_for(&pool, course_id).await.unwrap()[0].id;
        (pool, user_id, course_id, lesson_id)
    }

    #[tokio::test]
    async fn test_mark_complete_twice_single_row() {
        let (pool, user_id, _course_id, lesson_id) = setup().await;

        mark_complete(&pool, user_id, lesson_id).await.unwrap();
        mark_complete(&pool, user_id, lesson_id).await.unwrap();

        let rows: Vec<Progress> = sqlx::query_as(
            "SELECT id, user_id, lesson_id, completed FROM progress \
             WHERE user_id = ? AND lesson_id = ?",
        )
        .bind(user_id)
        .bind(lesson_id)
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert!(rows[0].completed);
    }

    #[tokio::test]
    async fn test_for_course_maps_by_lesson() {
        let (pool, user_id, course_id, lesson_id) = setup().await;

        assert!(for_course(&pool, user_id, course_id)
            .await
            .unwrap()
            .is_empty());

        mark_complete(&pool, user_id, lesson_id).await.unwrap();

        let map = for_course(&pool, user_id, course_id).await.unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.get(&lesson_id).unwrap().completed);
    }

    #[tokio::test]
    async fn test_for_course_excludes_other_courses() {
        let (pool, user_id, course_id, lesson_id) = setup().await;
        mark_complete(&pool, user_id, lesson_id).await.unwrap();

        let other_course = courses::all(&pool).await.unwrap()[1].id;
        assert_ne!(other_course, course_id);
        assert!(for_course(&pool, user_id, other_course)
            .await
            .unwrap()
            .is_empty());
    }
}
