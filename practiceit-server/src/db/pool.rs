//! SQLite connection pool management

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Path value selecting a private in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

/// Default maximum connections for a file-backed pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Storage connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Database file, or `:memory:`
    pub path: PathBuf,

    /// Pool size for file-backed databases (in-memory always uses one)
    pub max_connections: u32,

    /// Enforce `REFERENCES` constraints on every connection
    pub foreign_keys: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./practiceit.db"),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            foreign_keys: true,
        }
    }
}

impl DbConfig {
    /// File-backed database at `path` with default pool settings.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Private in-memory database.
    pub fn in_memory() -> Self {
        Self::with_path(MEMORY_PATH)
    }

    pub fn is_memory(&self) -> bool {
        self.path == Path::new(MEMORY_PATH)
    }
}

/// Create a SQLite connection pool.
///
/// File databases are created if missing and opened in WAL mode. An
/// in-memory database lives inside a single connection, so its pool is
/// pinned to exactly one connection that is never recycled.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::with_path("./practiceit.db")).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<SqlitePool, sqlx::Error> {
    let base = if config.is_memory() {
        SqliteConnectOptions::from_str("sqlite::memory:")?
    } else {
        SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
    };
    let options = base
        .foreign_keys(config.foreign_keys)
        .busy_timeout(Duration::from_secs(5));

    let pool_options = if config.is_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    tracing::debug!(path = %config.path.display(), "opening database");
    pool_options.connect_with(options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DbConfig::default();
        assert_eq!(config.path, PathBuf::from("./practiceit.db"));
        assert_eq!(config.max_connections, 5);
        assert!(config.foreign_keys);
        assert!(!config.is_memory());
        assert!(DbConfig::in_memory().is_memory());
    }

    #[tokio::test]
    async fn file_pool_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.sqlite");
        let pool = create_pool(&DbConfig::with_path(&path)).await.unwrap();

        let result: (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(result.0, 1);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn foreign_keys_follow_config() {
        let pool = create_pool(&DbConfig::in_memory()).await.unwrap();
        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);

        let config = DbConfig {
            foreign_keys: false,
            ..DbConfig::in_memory()
        };
        let pool = create_pool(&config).await.unwrap();
        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 0);
    }

    #[tokio::test]
    async fn memory_pool_keeps_its_data() {
        let pool = create_pool(&DbConfig::in_memory()).await.unwrap();
        sqlx::query("CREATE TABLE t (x INT)").execute(&pool).await.unwrap();
        sqlx::query("INSERT INTO t VALUES (1)").execute(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM t")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
