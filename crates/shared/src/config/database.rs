use anyhow::Context;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        connection_string: &str,
        max_connections: u32,
    ) -> anyhow::Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(connection_string)
            .await
            .context("Failed to create database connection pool")?;

        Ok(pool)
    }
}
