use crate::{ContactFeed, ContactRepository, DbError, Result};

use ab_core::file_safe_name;

use std::collections::HashMap;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::sync::RwLock;

pub const DEFAULT_DATABASE_FILENAME: &str = "addressbook.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// An open database and the live feed every repository on it publishes to.
#[derive(Clone)]
struct OpenDatabase {
    pool: SqlitePool,
    feed: Arc<ContactFeed>,
}

/// Owns one SQLite pool per account.
///
/// Each account's contacts live in a file named after the account email;
/// that file name is the only thing partitioning contacts between accounts.
/// When no email is known the shared default file is used.
pub struct AccountDatabases {
    pools: Arc<RwLock<HashMap<String, OpenDatabase>>>,
    base_path: PathBuf,
    max_connections: u32,
    default_filename: String,
}

impl AccountDatabases {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            pools: Arc::new(RwLock::new(HashMap::new())),
            base_path: base_path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            default_filename: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_default_filename(mut self, filename: impl Into<String>) -> Self {
        self.default_filename = filename.into();
        self
    }

    /// Open (or reuse) the database for `email`.
    pub async fn open(&self, email: Option<&str>) -> Result<SqlitePool> {
        Ok(self.open_database(email).await?.pool)
    }

    /// Contact repository for `email`.
    ///
    /// Every repository handed out for the same open database shares one live
    /// feed, so a write through any of them reaches all subscribers.
    pub async fn contacts(&self, email: Option<&str>) -> Result<ContactRepository> {
        let database = self.open_database(email).await?;
        Ok(ContactRepository::with_feed(database.pool, database.feed))
    }

    async fn open_database(&self, email: Option<&str>) -> Result<OpenDatabase> {
        let key = self.file_name(email);

        // Fast path: pool already open (read lock)
        {
            let pools = self.pools.read().await;
            if let Some(database) = pools.get(&key) {
                return Ok(database.clone());
            }
        }

        // Slow path: hold the write lock for the whole creation
        let mut pools = self.pools.write().await;

        // Another task may have opened it while we waited
        if let Some(database) = pools.get(&key) {
            return Ok(database.clone());
        }

        let database = OpenDatabase {
            pool: self.create_pool(&key).await?,
            feed: Arc::new(ContactFeed::new()),
        };
        pools.insert(key.clone(), database.clone());
        info!("Opened account database {key}");

        Ok(database)
    }

    /// Close the database for `email`. Returns false if it was not open.
    pub async fn close(&self, email: Option<&str>) -> bool {
        let key = self.file_name(email);
        let removed = self.pools.write().await.remove(&key);

        match removed {
            Some(database) => {
                database.pool.close().await;
                info!("Closed account database {key}");
                true
            }
            None => {
                debug!("Account database {key} was not open");
                false
            }
        }
    }

    /// Close every open database.
    pub async fn close_all(&self) {
        let drained: Vec<(String, OpenDatabase)> = self.pools.write().await.drain().collect();
        for (key, database) in drained {
            database.pool.close().await;
            info!("Closed account database {key}");
        }
    }

    pub async fn is_open(&self, email: Option<&str>) -> bool {
        let key = self.file_name(email);
        self.pools.read().await.contains_key(&key)
    }

    /// Path of the database file backing `email`.
    pub fn database_path(&self, email: Option<&str>) -> PathBuf {
        self.base_path.join(self.file_name(email))
    }

    fn file_name(&self, email: Option<&str>) -> String {
        match email.map(str::trim) {
            Some(email) if !email.is_empty() => file_safe_name(email),
            _ => self.default_filename.clone(),
        }
    }

    async fn create_pool(&self, file_name: &str) -> Result<SqlitePool> {
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!(
                    "Failed to create database directory {}: {}",
                    self.base_path.display(),
                    e
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let options = SqliteConnectOptions::new()
            .filename(self.base_path.join(file_name))
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }
}
