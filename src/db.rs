use std::{str::FromStr, time::Duration};

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::log::LevelFilter;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// What a pool is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PoolRole {
    /// Auth lookups, cart listings and exports; opened read-only.
    Read,
    /// Cart writes; always a single connection.
    Write,
    /// CLI commands and tests; creates the database file when missing.
    Maintenance,
}

/// Connection options applied to every connection of the pool.
///
/// Readers do not set the journal mode: WAL is persisted in the file by the
/// first writer and a read-only connection cannot change it.
pub fn connect_options(database_url: &str, role: PoolRole) -> Result<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT)
        .synchronous(SqliteSynchronous::Normal)
        .pragma("temp_store", "memory")
        .log_statements(LevelFilter::Debug);

    Ok(match role {
        PoolRole::Read => options.read_only(true),
        PoolRole::Write => options.journal_mode(SqliteJournalMode::Wal),
        PoolRole::Maintenance => options
            .journal_mode(SqliteJournalMode::Wal)
            .create_if_missing(true),
    })
}

pub async fn connect(
    database_url: &str,
    role: PoolRole,
    max_connections: u32,
) -> Result<SqlitePool> {
    let max_connections = match role {
        PoolRole::Write => 1,
        PoolRole::Read | PoolRole::Maintenance => max_connections.max(1),
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url, role)?)
        .await?;

    tracing::info!(%role, max_connections, "database pool ready");

    Ok(pool)
}

/// Pool for CLI commands and tests.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    connect(database_url, PoolRole::Maintenance, max_connections).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[tokio::test]
    async fn test_create_pool_applies_pragmas() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();

        let journal_mode: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(journal_mode.0, "memory");

        let foreign_keys: (i32,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(foreign_keys.0, 1);

        let temp_store: (i32,) = sqlx::query_as("PRAGMA temp_store")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(temp_store.0, 2);
    }

    #[tokio::test]
    async fn test_every_read_connection_gets_busy_timeout() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}", dir.child("db.sqlite3").display());

        let writer = create_pool(&url, 1).await.unwrap();
        let journal_mode: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&writer)
            .await
            .unwrap();
        assert_eq!(journal_mode.0, "wal");

        let readers = connect(&url, PoolRole::Read, 3).await.unwrap();
        let first = readers.acquire().await.unwrap();
        let mut second = readers.acquire().await.unwrap();
        drop(first);

        let busy_timeout: (i64,) = sqlx::query_as("PRAGMA busy_timeout")
            .fetch_one(&mut *second)
            .await
            .unwrap();
        assert_eq!(busy_timeout.0, 5000);

        let temp_store: (i32,) = sqlx::query_as("PRAGMA temp_store")
            .fetch_one(&mut *second)
            .await
            .unwrap();
        assert_eq!(temp_store.0, 2);
    }

    #[tokio::test]
    async fn test_read_pool_rejects_writes() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}", dir.child("db.sqlite3").display());

        let writer = create_pool(&url, 1).await.unwrap();
        sqlx::query("CREATE TABLE note (body TEXT)")
            .execute(&writer)
            .await
            .unwrap();

        let readers = connect(&url, PoolRole::Read, 2).await.unwrap();
        let result = sqlx::query("INSERT INTO note (body) VALUES ('x')")
            .execute(&readers)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_write_pool_is_single_connection() {
        let pool = connect("sqlite::memory:", PoolRole::Write, 8).await.unwrap();

        assert_eq!(pool.options().get_max_connections(), 1);
    }
}
