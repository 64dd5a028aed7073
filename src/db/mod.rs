pub mod courses;
pub mod enrollments;
pub mod progress;
pub mod seed;
pub mod sessions;
pub mod users;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Embedded schema migrations, applied at startup and in tests
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Create a SQLite connection pool
///
/// Foreign keys are enforced on every connection; the uniqueness
/// constraints on enrollments and progress are what make concurrent
/// double-submits converge instead of duplicating rows.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Creating database connection pool...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}

/// In-memory pool for tests
///
/// Capped at a single connection: every connection to `sqlite::memory:`
/// opens its own database, so a larger pool would see different schemas.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    MIGRATOR.run(&pool).await.expect("failed to run migrations");
    pool
}
