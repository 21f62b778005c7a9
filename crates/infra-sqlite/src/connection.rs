// SQLite Connection Pool Setup

use foodq_core::error::{AppError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

const MAX_CONNECTIONS: u32 = 10;

/// Create SQLite connection pool with WAL mode and foreign keys enforced
///
/// Every connection to `:memory:` opens its own private database, so in-memory
/// pools are pinned to a single long-lived connection.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let in_memory = database_url.contains(":memory:");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Config(format!("Invalid database url {}: {}", database_url, e)))?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true)
        .create_if_missing(true);

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(pool)
}
