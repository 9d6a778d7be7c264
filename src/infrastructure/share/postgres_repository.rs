//! PostgreSQL share registry

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::domain::{DomainError, ShareRecord, ShareRepository, ShareRole, ShareTargetType};

/// Column list for `prompt_shares` SELECT queries.
const COLUMNS: &str = "\
    id, prompt_id, tenant_id, target_type, target_identifier, role, \
    created_by, created_at, expires_at";

/// A `prompt_shares` row as stored; enum columns are text
#[derive(Debug, FromRow)]
struct ShareRow {
    id: String,
    prompt_id: String,
    tenant_id: String,
    target_type: String,
    target_identifier: String,
    role: String,
    created_by: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl TryFrom<ShareRow> for ShareRecord {
    type Error = DomainError;

    fn try_from(row: ShareRow) -> Result<Self, Self::Error> {
        Ok(Self {
            target_type: parse_target_type(&row.target_type)?,
            role: parse_role(&row.role)?,
            id: row.id,
            prompt_id: row.prompt_id,
            tenant_id: row.tenant_id,
            target_identifier: row.target_identifier,
            created_by: row.created_by,
            created_at: row.created_at,
            expires_at: row.expires_at,
        })
    }
}

/// PostgreSQL implementation of ShareRepository backed by `prompt_shares`
#[derive(Debug, Clone)]
pub struct PostgresShareRepository {
    pool: PgPool,
}

impl PostgresShareRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareRepository for PostgresShareRepository {
    async fn add_share(&self, record: ShareRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO prompt_shares (id, prompt_id, tenant_id, target_type, target_identifier,
                                       role, created_by, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&record.id)
        .bind(&record.prompt_id)
        .bind(&record.tenant_id)
        .bind(record.target_type.as_str())
        .bind(&record.target_identifier)
        .bind(record.role.as_str())
        .bind(&record.created_by)
        .bind(record.created_at)
        .bind(record.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::from_insert("Share", &record.id, e))?;

        debug!(prompt_id = %record.prompt_id, role = %record.role, "Added prompt share");
        Ok(())
    }

    async fn list_shares(
        &self,
        prompt_id: &str,
        tenant_id: &str,
    ) -> Result<Vec<ShareRecord>, DomainError> {
        let query =
            format!("SELECT {COLUMNS} FROM prompt_shares WHERE prompt_id = $1 AND tenant_id = $2");
        let rows = sqlx::query_as::<_, ShareRow>(&query)
            .bind(prompt_id)
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list shares: {}", e)))?;

        rows.into_iter().map(ShareRecord::try_from).collect()
    }

    async fn remove_share(&self, share_id: &str, tenant_id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM prompt_shares WHERE id = $1 AND tenant_id = $2")
            .bind(share_id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete share: {}", e)))?;

        debug!(share_id, rows = result.rows_affected(), "Removed prompt share");
        Ok(result.rows_affected() > 0)
    }
}

fn parse_target_type(s: &str) -> Result<ShareTargetType, DomainError> {
    s.parse()
        .map_err(|e| DomainError::storage(format!("Invalid share in database: {}", e)))
}

fn parse_role(s: &str) -> Result<ShareRole, DomainError> {
    s.parse()
        .map_err(|e| DomainError::storage(format!("Invalid share in database: {}", e)))
}
