//! Database configuration for the `PostgreSQL` task store.
//!
//! Settings come from the process environment. [`DatabaseConfig::load`]
//! seeds the environment from a `.env` file first, when one exists.

use crate::task::adapters::postgres::TaskPgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::env;
use thiserror::Error;

/// Environment variable holding the database connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable holding the maximum connection pool size.
pub const POOL_SIZE_VAR: &str = "TASKS_DB_POOL_SIZE";

/// Pool size used when [`POOL_SIZE_VAR`] is unset.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while loading configuration or building the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} missing, it is required")]
    MissingVariable(&'static str),

    /// The pool size is not a positive integer.
    #[error("TASKS_DB_POOL_SIZE must be a positive integer, got '{0}'")]
    InvalidPoolSize(String),

    /// The `.env` file exists but could not be read.
    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    /// The connection pool could not be created.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Connection settings for the task database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    database_url: String,
    max_pool_size: u32,
}

impl DatabaseConfig {
    /// Creates a configuration with the default pool size.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DotEnv`] when an existing `.env` file cannot be
    /// parsed, or any error from [`Self::from_env`].
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            return Err(ConfigError::DotEnv(err));
        }
        Self::from_env()
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] when [`DATABASE_URL_VAR`] is
    /// unset, or [`ConfigError::InvalidPoolSize`] when [`POOL_SIZE_VAR`] is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingVariable(DATABASE_URL_VAR))?;

        let max_pool_size = match lookup(POOL_SIZE_VAR) {
            None => DEFAULT_POOL_SIZE,
            Some(raw) => parse_pool_size(&raw)?,
        };

        Ok(Self {
            database_url,
            max_pool_size,
        })
    }

    /// Overrides the maximum pool size.
    ///
    /// A size of zero is accepted here and rejected by [`Self::build_pool`].
    #[must_use]
    pub const fn with_max_pool_size(mut self, max_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self
    }

    /// Returns the database connection URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn max_pool_size(&self) -> u32 {
        self.max_pool_size
    }

    /// Builds the connection pool used by
    /// [`PostgresTaskRepository`](crate::task::adapters::postgres::PostgresTaskRepository).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPoolSize`] when the pool size is zero,
    /// or [`ConfigError::Pool`] when the pool cannot establish its initial
    /// connections.
    pub fn build_pool(&self) -> Result<TaskPgPool, ConfigError> {
        if self.max_pool_size == 0 {
            return Err(ConfigError::InvalidPoolSize(self.max_pool_size.to_string()));
        }
        let manager = ConnectionManager::<PgConnection>::new(self.database_url.as_str());
        let pool = Pool::builder()
            .max_size(self.max_pool_size)
            .build(manager)?;
        Ok(pool)
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| ConfigError::InvalidPoolSize(raw.to_owned()))
}
