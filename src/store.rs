//! Pool setup and table DDL.

use crate::config::Config;
use crate::error::StoreError;
use crate::sql;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool for `config.database_url`, creating the database file if it does not exist.
pub async fn connect(config: &Config) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(
        database_url = %config.database_url,
        max_connections = config.max_connections,
        "connected to database"
    );
    Ok(pool)
}

/// Create the complaints table if not exists. Safe to run on every startup.
pub async fn ensure_complaints_table(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(sql::CREATE_TABLE).execute(pool).await?;
    Ok(())
}
