//! Connection setup and table creation

use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::config::Config;
use crate::entity::questions;

/// Open a connection pool to the configured database
pub async fn connect(config: &Config) -> anyhow::Result<DatabaseConnection> {
    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set when the in-memory store is not in use")?;

    let mut options = ConnectOptions::new(url.to_string());
    options
        .max_connections(config.db_max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .context("Failed to connect to database")
}

/// Create the `questions` table if it does not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(questions::Entity);
    table.if_not_exists();

    db.execute(backend.build(&table)).await?;
    Ok(())
}
