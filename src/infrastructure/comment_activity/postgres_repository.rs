//! PostgreSQL comment activity repository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::metadata::encode_metadata;
use crate::domain::{CommentActivityRecord, CommentActivityRepository, DomainError};

/// PostgreSQL implementation of CommentActivityRepository backed by `prompt_comment_activity`
#[derive(Debug, Clone)]
pub struct PostgresCommentActivityRepository {
    pool: PgPool,
}

impl PostgresCommentActivityRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentActivityRepository for PostgresCommentActivityRepository {
    async fn log_comment_activity(
        &self,
        record: CommentActivityRecord,
    ) -> Result<(), DomainError> {
        let metadata = encode_metadata(record.metadata.as_ref())?;

        sqlx::query(
            r#"
            INSERT INTO prompt_comment_activity (id, comment_id, prompt_id, tenant_id, action,
                                                 actor, metadata, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&record.id)
        .bind(&record.comment_id)
        .bind(&record.prompt_id)
        .bind(&record.tenant_id)
        .bind(&record.action)
        .bind(&record.actor)
        .bind(metadata)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::from_insert("Comment activity", &record.id, e))?;

        debug!(comment_id = %record.comment_id, action = %record.action, "Logged comment activity");
        Ok(())
    }
}
