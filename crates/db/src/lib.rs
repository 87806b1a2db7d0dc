//! Data access for the two stores.
//!
//! The service talks to two independent SQLite databases: the read-mostly
//! catalog store (movies, directors, actors) and the mutable customer
//! store (customers, plans, rentals). Each gets its own pool and its own
//! embedded migration set.

use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// The acquire timeout doubles as the call-level deadline: a wedged store
/// fails the operation instead of blocking the caller indefinitely.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Create a single-connection in-memory pool, for tests and demos.
///
/// One connection only: every handle on the pool sees the same in-memory
/// database, which separate connections would not.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
}

/// Apply the catalog-store schema to a pool.
pub async fn run_catalog_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("migrations/catalog").run(pool).await
}

/// Apply the customer-store schema to a pool.
pub async fn run_customer_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("migrations/customer").run(pool).await
}

/// Cheap connectivity probe.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
