use std::str::FromStr;

use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// DatabaseConfig describes the SQLite store.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

fn default_url() -> String {
    "sqlite://data/product_catalog.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            run_migrations: default_run_migrations(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Opens the pool. The database file is created when missing and foreign
/// keys are enforced on every connection.
///
/// An in-memory database lives only while a connection to it is open, so
/// such URLs get one connection that never idles out or expires.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&cfg.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if cfg.is_in_memory() {
        if cfg.max_connections != 1 {
            tracing::warn!(
                configured = cfg.max_connections,
                "in-memory database uses a single connection"
            );
        }
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        if let Some(dir) = options.get_filename().parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        SqlitePoolOptions::new().max_connections(cfg.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
