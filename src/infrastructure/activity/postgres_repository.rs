//! PostgreSQL activity log repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::domain::metadata::{decode_metadata, encode_metadata};
use crate::domain::{ActivityRecord, ActivityRepository, DomainError};
use crate::infrastructure::storage::limit_param;

/// Column list for `prompt_activity_log` SELECT queries.
const COLUMNS: &str = "id, prompt_id, tenant_id, actor, action, metadata, created_at";

/// A `prompt_activity_log` row as stored
#[derive(Debug, FromRow)]
struct ActivityRow {
    id: String,
    prompt_id: String,
    tenant_id: String,
    actor: Option<String>,
    action: String,
    metadata: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActivityRow> for ActivityRecord {
    type Error = DomainError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        Ok(Self {
            metadata: decode_metadata(row.metadata.as_deref())?,
            id: row.id,
            prompt_id: row.prompt_id,
            tenant_id: row.tenant_id,
            actor: row.actor,
            action: row.action,
            created_at: row.created_at,
        })
    }
}

/// PostgreSQL implementation of ActivityRepository backed by `prompt_activity_log`
#[derive(Debug, Clone)]
pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn log_activity(&self, record: ActivityRecord) -> Result<(), DomainError> {
        let metadata = encode_metadata(record.metadata.as_ref())?;

        sqlx::query(
            r#"
            INSERT INTO prompt_activity_log (id, prompt_id, tenant_id, actor, action,
                                             metadata, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&record.id)
        .bind(&record.prompt_id)
        .bind(&record.tenant_id)
        .bind(&record.actor)
        .bind(&record.action)
        .bind(metadata)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::from_insert("Activity", &record.id, e))?;

        debug!(prompt_id = %record.prompt_id, action = %record.action, "Logged prompt activity");
        Ok(())
    }

    async fn list_activity(
        &self,
        prompt_id: &str,
        tenant_id: &str,
        limit: usize,
    ) -> Result<Vec<ActivityRecord>, DomainError> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompt_activity_log \
             WHERE prompt_id = $1 AND tenant_id = $2 \
             ORDER BY created_at DESC \
             LIMIT $3"
        );
        let rows = sqlx::query_as::<_, ActivityRow>(&query)
            .bind(prompt_id)
            .bind(tenant_id)
            .bind(limit_param(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list activity: {}", e)))?;

        rows.into_iter().map(ActivityRecord::try_from).collect()
    }
}
