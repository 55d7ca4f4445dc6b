//! Relational mirror for site content.
//!
//! Holds the best-effort backup copy of projects, testimonials and
//! inquiries, plus the categories and company info that only live here.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod mirror;
pub mod models;
pub mod repositories;

pub use error::RepoError;
pub use mirror::ContentMirror;

pub type DbPool = sqlx::PgPool;

/// How long a query waits for a mirror connection before giving up.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool from a database URL.
///
/// Connections are opened on first use, so an unreachable mirror does not
/// stop the caller from starting. Only a malformed URL is an error here.
pub fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(database_url)
}

/// Check the mirror and bring its schema up to date.
///
/// Returns whether the mirror is ready. Failures are logged, not raised:
/// the site keeps serving from the primary store without a mirror.
pub async fn prepare_mirror(pool: &DbPool) -> bool {
    if let Err(e) = health_check(pool).await {
        tracing::error!(error = %e, "Mirror database unreachable, continuing without it");
        return false;
    }
    if let Err(e) = run_migrations(pool).await {
        tracing::error!(error = %e, "Mirror migrations failed, continuing without them");
        return false;
    }
    true
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
