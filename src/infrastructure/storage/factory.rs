//! Repository factory for runtime backend selection

use std::sync::Arc;

use tracing::info;

use crate::config::StorageSettings;
use crate::domain::{
    ActivityRepository, CommentActivityRepository, DomainError, NotificationRepository,
    ShareRepository,
};
use crate::infrastructure::activity::{InMemoryActivityRepository, PostgresActivityRepository};
use crate::infrastructure::comment_activity::{
    InMemoryCommentActivityRepository, PostgresCommentActivityRepository,
};
use crate::infrastructure::notification::{
    InMemoryNotificationRepository, PostgresNotificationRepository,
};
use crate::infrastructure::share::{InMemoryShareRepository, PostgresShareRepository};

use super::postgres::{connect_pool, PostgresConfig};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    InMemory,
    Postgres(PostgresConfig),
}

impl StorageConfig {
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    pub fn postgres(config: PostgresConfig) -> Self {
        Self::Postgres(config)
    }

    /// Creates a PostgreSQL configuration from a URL
    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    /// Resolves configured settings into a backend configuration
    pub fn from_settings(settings: &StorageSettings) -> Result<Self, DomainError> {
        match StorageType::from_str(&settings.backend) {
            Some(StorageType::InMemory) => Ok(Self::InMemory),
            Some(StorageType::Postgres) => {
                let url = settings.url.clone().ok_or_else(|| {
                    DomainError::configuration("storage.url is required for the postgres backend")
                })?;

                Ok(Self::Postgres(
                    PostgresConfig::new(url)
                        .with_max_connections(settings.max_connections)
                        .with_min_connections(settings.min_connections)
                        .with_connect_timeout(settings.connect_timeout_secs)
                        .with_idle_timeout(settings.idle_timeout_secs),
                ))
            }
            None => Err(DomainError::configuration(format!(
                "Unknown storage backend '{}'",
                settings.backend
            ))),
        }
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// The four data-layer repositories, all bound to the same backend
#[derive(Clone)]
pub struct Repositories {
    pub activity: Arc<dyn ActivityRepository>,
    pub comment_activity: Arc<dyn CommentActivityRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    pub shares: Arc<dyn ShareRepository>,
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}

/// Builds repositories for a storage configuration
#[derive(Debug)]
pub struct RepositoryFactory;

impl RepositoryFactory {
    pub async fn create(config: &StorageConfig) -> Result<Repositories, DomainError> {
        match config {
            StorageConfig::InMemory => {
                info!("Using in-memory storage");
                Ok(Self::in_memory())
            }
            StorageConfig::Postgres(pg_config) => {
                let pool = connect_pool(pg_config).await?;
                info!(
                    max_connections = pg_config.max_connections,
                    "Connected to PostgreSQL"
                );

                Ok(Repositories {
                    activity: Arc::new(PostgresActivityRepository::new(pool.clone())),
                    comment_activity: Arc::new(PostgresCommentActivityRepository::new(
                        pool.clone(),
                    )),
                    notifications: Arc::new(PostgresNotificationRepository::new(pool.clone())),
                    shares: Arc::new(PostgresShareRepository::new(pool)),
                })
            }
        }
    }

    /// Creates a fresh set of in-memory repositories
    pub fn in_memory() -> Repositories {
        Repositories {
            activity: Arc::new(InMemoryActivityRepository::new()),
            comment_activity: Arc::new(InMemoryCommentActivityRepository::new()),
            notifications: Arc::new(InMemoryNotificationRepository::new()),
            shares: Arc::new(InMemoryShareRepository::new()),
        }
    }
}
