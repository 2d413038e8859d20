//! Embedded schema migrations

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
#[error("Migration failed: {0}")]
pub struct MigrationError(#[from] sqlx::migrate::MigrateError);

/// Applies every pending migration under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
