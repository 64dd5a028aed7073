//! Demo catalog seed
//!
//! Optional startup seeding so a fresh install has something to enroll in.
//! Runs only when the course table is empty, so restarts do not duplicate
//! the catalog.

use sqlx::SqlitePool;

use crate::error::Result;

pub async fn seed_demo_data(pool: &SqlitePool) -> Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!("Course catalog already populated, skipping demo seed");
        return Ok(());
    }

    tracing::info!("Seeding demo course catalog");

    let python = insert_course(
        pool,
        "Python Basics",
        "Learn Python programming from scratch.",
    )
    .await?;
    let webdev = insert_course(
        pool,
        "Web Development",
        "Build websites with HTML, CSS, and JavaScript.",
    )
    .await?;

    insert_lesson(
        pool,
        python,
        "Introduction to Python",
        "Learn the basics of Python syntax.",
    )
    .await?;
    insert_lesson(
        pool,
        python,
        "Variables and Data Types",
        "Understand variables and data types in Python.",
    )
    .await?;
    insert_lesson(
        pool,
        webdev,
        "HTML Basics",
        "Introduction to HTML and its structure.",
    )
    .await?;

    insert_quiz(
        pool,
        python,
        "Python Quiz 1",
        "What is the output of print(2 + 3)?",
        "5",
    )
    .await?;
    insert_quiz(
        pool,
        webdev,
        "HTML Quiz 1",
        "What tag is used to create a paragraph?",
        "p",
    )
    .await?;

    Ok(())
}

async fn insert_course(pool: &SqlitePool, title: &str, description: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO courses (title, description) VALUES (?, ?)")
        .bind(title)
        .bind(description)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

async fn insert_lesson(pool: &SqlitePool, course_id: i64, title: &str, content: &str) -> Result<()> {
    sqlx::query("INSERT INTO lessons (course_id, title, content) VALUES (?, ?, ?)")
        .bind(course_id)
        .bind(title)
        .bind(content)
        .execute(pool)
        .await?;
    Ok(())
}

async fn insert_quiz(
    pool: &SqlitePool,
    course_id: i64,
    title: &str,
    question: &str,
    correct_answer: &str,
) -> Result<()> {
    sqlx::query("INSERT INTO quizzes (course_id, title, question, correct_answer) VALUES (?, ?, ?, ?)")
        .bind(course_id)
        .bind(title)
        .bind(question)
        .bind(correct_answer)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{courses, test_pool};

    #[tokio::test]
    async fn test_seed_populates_catalog() {
        let pool = test_pool().await;
        seed_demo_data(&pool).await.unwrap();

        let all = courses::all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "Python Basics");

        let lessons = courses::lessons_for(&pool, all[0].id).await.unwrap();
        assert_eq!(lessons.len(), 2);

        let quizzes = courses::quizzes_for(&pool, all[0].id).await.unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].correct_answer, "5");
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = test_pool().await;
        seed_demo_data(&pool).await.unwrap();
        seed_demo_data(&pool).await.unwrap();

        assert_eq!(courses::all(&pool).await.unwrap().len(), 2);
    }
}
