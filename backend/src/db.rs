use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
pub use sqlx::sqlite::{SqlitePool as DbPool, SqlitePoolOptions as DbPoolOptions};

use crate::config::DatabaseConfig;

/// Opens the pool, creating the database file on first run.
pub async fn connect(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    DbPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

pub async fn migrate(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrations complete.");
    Ok(())
}
