use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::sync::Once;
use tracing::info;

use crate::config::{DatabaseConfig, StorageBackend};

pub mod models;
pub mod repository;

static DRIVERS: Once = Once::new();

/// Open the connection pool for the configured backend.
pub async fn connect(config: &DatabaseConfig) -> Result<AnyPool, sqlx::Error> {
    DRIVERS.call_once(sqlx::any::install_default_drivers);

    let pool = pool_options(config).connect(&config.url).await?;

    info!("Connected to {:?} database", config.backend);
    Ok(pool)
}

/// An in-memory SQLite database lives and dies with its connection, so those
/// URLs are pinned to exactly one connection that is never idled out or
/// recycled; each pooled connection would otherwise see its own empty
/// database, and a reaped connection would drop all stored words.
fn pool_options(config: &DatabaseConfig) -> AnyPoolOptions {
    if config.url.contains(":memory:") {
        AnyPoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<std::time::Duration>)
            .max_lifetime(None::<std::time::Duration>)
    } else {
        AnyPoolOptions::new().max_connections(config.max_connections)
    }
}

/// Schema auto-creation at startup. Idempotent; there is no migration
/// history beyond CREATE TABLE IF NOT EXISTS.
pub async fn migrate(pool: &AnyPool, backend: StorageBackend) -> Result<(), sqlx::Error> {
    for statement in schema_statements(backend) {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

fn schema_statements(backend: StorageBackend) -> &'static [&'static str] {
    // Only the auto-increment primary key spelling differs between backends.
    match backend {
        StorageBackend::Postgres => &[
            "CREATE TABLE IF NOT EXISTS words (
                id BIGSERIAL PRIMARY KEY,
                original TEXT NOT NULL,
                translation TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS tags (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                color TEXT
            )",
            "CREATE TABLE IF NOT EXISTS word_tags (
                word_id BIGINT NOT NULL REFERENCES words (id),
                tag_id BIGINT NOT NULL REFERENCES tags (id),
                PRIMARY KEY (word_id, tag_id)
            )",
        ],
        StorageBackend::Sqlite => &[
            "CREATE TABLE IF NOT EXISTS words (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                original TEXT NOT NULL,
                translation TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS tags (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                color TEXT
            )",
            "CREATE TABLE IF NOT EXISTS word_tags (
                word_id INTEGER NOT NULL REFERENCES words (id),
                tag_id INTEGER NOT NULL REFERENCES tags (id),
                PRIMARY KEY (word_id, tag_id)
            )",
        ],
    }
}
