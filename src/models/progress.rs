use serde::{Deserialize, Serialize};

/// A user's completion record for one lesson
///
/// At most one row exists per (user, lesson) pair; writes go through an
/// upsert, so repeated completion marks converge on a single row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Progress {
    pub id: i64,
    pub user_id: i64,
    pub lesson_id: i64,
    pub completed: bool,
}
