use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Everything the pool needs to reach the store.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub path: String,
    pub pool_max_size: u32,
    pub pool_min_idle: u32,
    /// How long a checkout blocks on an exhausted pool before failing.
    pub pool_timeout: Duration,
    pub schema_path: Option<String>,
    pub seed_path: Option<String>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: "rentals.sqlite3".to_string(),
            pool_max_size: 20,
            pool_min_idle: 1,
            pool_timeout: Duration::from_secs(30),
            schema_path: None,
            seed_path: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db: DbConfig,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub logo_url: Option<String>,
}

impl Config {
    /// Reads `.env` (if any) and the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset keys fall back to defaults;
    /// set-but-unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DbConfig::default();

        let db = DbConfig {
            path: lookup("DATABASE_PATH").unwrap_or(defaults.path),
            pool_max_size: parse_or(&lookup, "DB_POOL_MAX_SIZE", defaults.pool_max_size)?,
            pool_min_idle: parse_or(&lookup, "DB_POOL_MIN_IDLE", defaults.pool_min_idle)?,
            pool_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_POOL_TIMEOUT_SECS",
                defaults.pool_timeout.as_secs(),
            )?),
            schema_path: lookup("DB_SCHEMA_PATH").filter(|s| !s.is_empty()),
            seed_path: lookup("DB_SEED_PATH").filter(|s| !s.is_empty()),
        };

        if db.pool_max_size == 0 {
            anyhow::bail!("DB_POOL_MAX_SIZE must be at least 1");
        }
        if db.pool_min_idle > db.pool_max_size {
            anyhow::bail!(
                "DB_POOL_MIN_IDLE ({}) exceeds DB_POOL_MAX_SIZE ({})",
                db.pool_min_idle,
                db.pool_max_size
            );
        }

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:3000".to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        Ok(Self {
            db,
            bind_addr,
            max_workers: parse_or(&lookup, "SERVER_MAX_WORKERS", 8)?,
            logo_url: lookup("LOGO_URL").filter(|s| !s.is_empty()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}
