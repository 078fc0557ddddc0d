//! Database - Connessione al database SQLite e creazione dello schema
//!
//! Lo schema viene creato all'avvio se assente; non esiste un sistema di migrazioni.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info, instrument};

const SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Opens a connection pool to the SQLite database at `database_url`.
///
/// The database file is created if missing. Foreign keys are declared by the schema but only
/// enforced when `enforce_foreign_keys` is set. In-memory databases live as long as their
/// connection, so they get a single connection that is never recycled.
#[instrument(skip(database_url))]
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    enforce_foreign_keys: bool,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(enforce_foreign_keys);

    let pool_options = if is_in_memory(database_url) {
        debug!("Using a single persistent connection for in-memory database");
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    info!("Connected to database");
    Ok(pool)
}

/// Creates the movie, director and genre tables when they do not exist yet.
#[instrument(skip(pool))]
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:", 1, false)
        .await
        .expect("Failed to open in-memory database");
    init_schema(&pool).await.expect("Failed to create schema");
    pool
}
