use serde::{Deserialize, Serialize};

/// A course: owns its lessons and quizzes
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
}
