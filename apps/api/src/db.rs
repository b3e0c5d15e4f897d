use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates the connection pool for the hosted contacts database.
///
/// The pool connects lazily, so the builder endpoints stay available while the
/// database is unreachable; only contact submissions fail.
pub fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Configuring PostgreSQL pool...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(database_url)?;

    info!("PostgreSQL pool configured");
    Ok(pool)
}
