// src/utils/db_connect.rs

use anyhow::{Context, Result};
use bb8::Pool;
use bb8_postgres::PostgresConnectionManager;
use log::info;
use std::str::FromStr;
use std::time::Duration;
use tokio_postgres::{Config, NoTls};

use crate::utils::env::env_usize;

pub type PgPool = Pool<PostgresConnectionManager<NoTls>>;

/// Builds a PostgreSQL config from DATABASE_URL, or from the POSTGRES_* variables when it is unset.
fn build_pg_config() -> Result<Config> {
    let mut config = match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => {
            info!("DB Config: using DATABASE_URL");
            Config::from_str(url.trim()).context("DATABASE_URL is not a valid PostgreSQL URL")?
        }
        _ => {
            let mut config = Config::new();
            let host = std::env::var("POSTGRES_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port_str = std::env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let port = port_str.parse::<u16>().unwrap_or(5432);
            let dbname = std::env::var("POSTGRES_DB").unwrap_or_else(|_| "stylr".to_string());
            let user = std::env::var("POSTGRES_USER").unwrap_or_else(|_| "postgres".to_string());
            let password = std::env::var("POSTGRES_PASSWORD").unwrap_or_default();

            info!(
                "DB Config: Host={}, Port={}, DB={}, User={}",
                host, port, dbname, user
            );
            config
                .host(&host)
                .port(port)
                .dbname(&dbname)
                .user(&user)
                .password(&password);
            config
        }
    };
    config.application_name("stylr_seo_seeder");
    config.connect_timeout(Duration::from_secs(10));
    Ok(config)
}

/// Initializes the database connection pool.
///
/// Seeding issues one statement at a time, so the pool stays small.
pub async fn connect() -> Result<PgPool> {
    let config = build_pg_config()?;
    info!("Connecting to PostgreSQL database...");
    let manager = PostgresConnectionManager::new(config, NoTls);

    let pool = Pool::builder()
        .max_size(env_usize("SEO_DB_POOL_SIZE", 4) as u32)
        .min_idle(Some(1))
        .idle_timeout(Some(Duration::from_secs(180)))
        .connection_timeout(Duration::from_secs(15))
        .build(manager)
        .await
        .context("Failed to build database connection pool")?;

    // Test connection
    let conn = pool
        .get()
        .await
        .context("Failed to get test connection from pool")?;
    conn.query_one("SELECT 1", &[])
        .await
        .context("Test query 'SELECT 1' failed")?;
    drop(conn);
    info!("Database connection pool initialized successfully.");
    Ok(pool)
}
