use serde::{Deserialize, Serialize};

/// Join record granting a user access to a course
///
/// At most one row exists per (user, course) pair, enforced by a uniqueness
/// constraint in the store.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
}
