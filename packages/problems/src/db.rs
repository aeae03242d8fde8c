// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides shared access to the SQLite pool and storage layers

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tracing::{debug, info};

use arbiter_accounts::ProfileStorage;
use arbiter_contests::ContestStorage;
use arbiter_storage::{Result, StorageError};
use arbiter_tags::TagStorage;

use super::storage::ProblemStorage;

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub problem_storage: Arc<ProblemStorage>,
    pub tag_storage: Arc<TagStorage>,
    pub contest_storage: Arc<ContestStorage>,
    pub profile_storage: Arc<ProfileStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let problem_storage = Arc::new(ProblemStorage::new(pool.clone()));
        let tag_storage = Arc::new(TagStorage::new(pool.clone()));
        let contest_storage = Arc::new(ContestStorage::new(pool.clone()));
        let profile_storage = Arc::new(ProfileStorage::new(pool.clone()));

        Self {
            pool,
            problem_storage,
            tag_storage,
            contest_storage,
            profile_storage,
        }
    }

    /// Initialize database state with default configuration
    pub async fn init() -> Result<Self> {
        Self::init_with_path(None).await
    }

    /// Initialize database state with optional custom database path
    pub async fn init_with_path(database_path: Option<std::path::PathBuf>) -> Result<Self> {
        let database_path = database_path.unwrap_or_else(arbiter_core::database_file);

        // Ensure parent directory exists
        if let Some(parent) = database_path.parent() {
            std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());

        debug!("Connecting to database: {}", database_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect(&database_url)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        info!("Database connection established");

        Self::migrate(&pool).await?;

        Ok(Self::new(pool))
    }

    /// Run schema migrations; exposed so tests can run them against
    /// in-memory pools
    pub async fn migrate(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("../storage/migrations")
            .run(pool)
            .await
            .map_err(StorageError::Migration)?;

        debug!("Database migrations completed");
        Ok(())
    }
}
