//! # rosterd-store
//!
//! SQLite persistence layer for rosterd.
//!
//! Owns the connection pool, the schema, and the repositories. All audit
//! metadata (`created_at`, `updated_at`, `created_by`, `updated_by`) is
//! written here, on the write path, so callers never touch it directly.

pub mod repositories;
pub mod schema;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use rosterd_commons::Result;

pub use repositories::{
    DailyCounters, EmailRepository, NewEmail, NewUser, StatsRepository, UserRepository, UserUpdate,
};

/// Handle over the SQLite database; cheap to clone.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if missing) the database at `path` and applies the
    /// schema.
    pub async fn open(path: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        schema::apply(&pool).await?;
        info!("SQLite store opened at {} ({} max connections)", path, max_connections);
        Ok(Store { pool })
    }

    /// Opens a fresh in-memory database. Single connection so the database
    /// lives for the whole pool lifetime. Used by tests.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        schema::apply(&pool).await?;
        Ok(Store { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn stats(&self) -> StatsRepository {
        StatsRepository::new(self.pool.clone())
    }

    pub fn emails(&self) -> EmailRepository {
        EmailRepository::new(self.pool.clone())
    }

    /// Lightweight readiness probe: runs a trivial query.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
