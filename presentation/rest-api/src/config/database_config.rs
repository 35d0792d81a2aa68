use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("config.unknown_product_store")]
    UnknownStore(String),
    #[error("config.database_url_missing")]
    DatabaseUrlMissing,
}

/// Which product store backs the API.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Postgres {
        database: DatabaseConfig,
        migrations_path: String,
    },
    /// Process-local store, lost on restart. Meant for local runs.
    Memory,
}

impl StoreConfig {
    /// Load store configuration from environment variables
    ///
    /// Environment variables:
    /// - PRODUCT_STORE: "postgres" (default) or "memory"
    /// - DATABASE_URL: PostgreSQL connection string (required for postgres)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - DATABASE_ACQUIRE_TIMEOUT_SECS: pool acquire timeout (default: 30)
    /// - DATABASE_MIGRATIONS_PATH: migrations directory
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = lookup("PRODUCT_STORE").unwrap_or_else(|| "postgres".to_string());

        match store.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreConfig::Memory),
            "postgres" => {
                let url = lookup("DATABASE_URL").ok_or(ConfigError::DatabaseUrlMissing)?;
                let mut database = DatabaseConfig::new(url);
                database.max_connections = parse_or_default(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    DatabaseConfig::DEFAULT_MAX_CONNECTIONS,
                );
                database.acquire_timeout = Duration::from_secs(parse_or_default(
                    &lookup,
                    "DATABASE_ACQUIRE_TIMEOUT_SECS",
                    DatabaseConfig::DEFAULT_ACQUIRE_TIMEOUT.as_secs(),
                ));
                let migrations_path = lookup("DATABASE_MIGRATIONS_PATH")
                    .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

                Ok(StoreConfig::Postgres {
                    database,
                    migrations_path,
                })
            }
            _ => Err(ConfigError::UnknownStore(store)),
        }
    }
}

fn parse_or_default<T: FromStr + Copy + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{key}={raw} is not valid, using {default}");
            default
        }),
    }
}

/// Connects the pool and brings the schema up to date.
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(
    database: &DatabaseConfig,
    migrations_path: &str,
) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(database).await?;
    run_migrations(&pool, migrations_path).await?;
    Ok(pool)
}
