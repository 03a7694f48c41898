//! Shared helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use pg_embedded_setup_unpriv::TestCluster;
use std::sync::Arc;
use taskboard::task::{adapters::postgres::PostgresTaskRepository, services::TaskService};
use tokio::runtime::Runtime;

/// Boxed error returned by setup helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// SQL creating the `tasks` table.
pub const CREATE_SCHEMA_SQL: &str = include_str!("schema.sql");

/// Template database name for the pre-built schema.
pub const TEMPLATE_DB: &str = "taskboard_test_template";

/// Service type backed by the `PostgreSQL` adapter.
pub type PgTaskService = TaskService<PostgresTaskRepository>;

/// Creates a tokio runtime for async operations in tests.
///
/// # Panics
///
/// Panics if the runtime cannot be built.
#[expect(clippy::expect_used, reason = "Test setup fails loudly")]
pub fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or schema setup fails.
pub fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(CREATE_SCHEMA_SQL)
                .map_err(|e| eyre::eyre!("schema setup failed: {e}"))?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Creates `db_name` from the template and returns a repository over it.
///
/// # Errors
///
/// Returns an error if database creation or pool setup fails.
pub fn setup_repository(
    cluster: &TestCluster,
    db_name: &str,
) -> Result<Arc<PostgresTaskRepository>, BoxError> {
    cluster
        .create_database_from_template(db_name, TEMPLATE_DB)
        .map_err(|e| Box::new(e) as BoxError)?;
    let url = cluster.connection().database_url(db_name);
    let manager = ConnectionManager::<PgConnection>::new(url);
    // A single connection keeps each test's statements ordered.
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(Arc::new(PostgresTaskRepository::new(pool)))
}

/// Drops the test database when the test ends, including on panic.
pub struct CleanupGuard<'a> {
    cluster: &'a TestCluster,
    db_name: String,
}

impl<'a> CleanupGuard<'a> {
    /// Creates a guard for `db_name` on `cluster`.
    pub const fn new(cluster: &'a TestCluster, db_name: String) -> Self {
        Self { cluster, db_name }
    }
}

impl Drop for CleanupGuard<'_> {
    #[expect(
        clippy::print_stderr,
        reason = "Test cleanup warnings are informational"
    )]
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(self.db_name.as_str()) {
            eprintln!("Warning: failed to drop test database {}: {e}", self.db_name);
        }
    }
}

/// Per-test database with a repository and a service sharing it.
pub struct PgFixture {
    /// Repository over the test database.
    pub repository: Arc<PostgresTaskRepository>,
    /// Service over [`Self::repository`].
    pub service: PgTaskService,
    _guard: CleanupGuard<'static>,
}

/// Prepares a fresh database named after `prefix`.
///
/// # Errors
///
/// Returns an error if template or database setup fails.
pub fn fresh_fixture(cluster: &'static TestCluster, prefix: &str) -> Result<PgFixture, BoxError> {
    ensure_template(cluster)?;
    let db_name = format!("{prefix}_{}", uuid::Uuid::new_v4().simple());
    let guard = CleanupGuard::new(cluster, db_name.clone());
    let repository = setup_repository(cluster, &db_name)?;
    Ok(PgFixture {
        service: TaskService::new(Arc::clone(&repository)),
        repository,
        _guard: guard,
    })
}
