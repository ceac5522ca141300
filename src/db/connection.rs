use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, OpenFlags};
use std::fs;
use tracing::{debug, info};

use crate::config::DbConfig;
use crate::errors::ServerError;

/// Process-wide connection pool. Built once in `main` and handed to
/// everything that talks to the store.
#[derive(Clone)]
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Builds the pool without connecting. The database file is only created
    /// when a schema is configured; otherwise a missing or unreadable store
    /// surfaces at checkout as `DataUnavailable`.
    pub fn open(cfg: &DbConfig) -> Result<Self, ServerError> {
        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if cfg.schema_path.is_some() {
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        let manager = SqliteConnectionManager::file(&cfg.path)
            .with_flags(flags)
            .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));

        let pool = Pool::builder()
            .max_size(cfg.pool_max_size)
            .min_idle(Some(cfg.pool_min_idle))
            .connection_timeout(cfg.pool_timeout)
            .build_unchecked(manager);

        info!(
            path = %cfg.path,
            max_size = cfg.pool_max_size,
            min_idle = cfg.pool_min_idle,
            "connection pool ready"
        );

        Ok(Self { pool })
    }

    /// Checks a connection out, runs `f(conn)`, and returns it to the pool on
    /// every exit path. An exhausted pool blocks up to the configured timeout
    /// and then fails with `DataUnavailable`.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        let mut conn = self.pool.get()?;
        debug!(idle = self.pool.state().idle_connections, "connection checked out");
        f(&mut conn)
    }

    /// Cheap liveness check.
    pub fn ping(&self) -> Result<(), ServerError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok(())
        })
    }

    /// Ends the pool's lifecycle. Outstanding clones keep their connections
    /// until they drop too.
    pub fn shutdown(self) {
        let state = self.pool.state();
        info!(
            connections = state.connections,
            idle = state.idle_connections,
            "closing connection pool"
        );
        drop(self.pool);
    }
}

fn apply_sql_file(db: &Database, path: &str, what: &str) -> Result<(), ServerError> {
    let sql = fs::read_to_string(path)
        .map_err(|e| ServerError::DbError(format!("Failed to read {what} file {path}: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&sql)
            .map_err(|e| ServerError::DbError(format!("Failed to apply {what}: {e}")))
    })?;

    info!(path, "{what} applied");
    Ok(())
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: &str) -> Result<(), ServerError> {
    apply_sql_file(db, schema_path, "schema")
}

/// Load demo rows from a SQL file
pub fn seed_db(db: &Database, seed_path: &str) -> Result<(), ServerError> {
    apply_sql_file(db, seed_path, "seed")
}
