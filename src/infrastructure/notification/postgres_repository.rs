//! PostgreSQL notification repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::domain::metadata::{decode_metadata, encode_metadata};
use crate::domain::timestamp;
use crate::domain::{DomainError, NotificationRecord, NotificationRepository};
use crate::infrastructure::storage::limit_param;

/// Column list for `notifications` SELECT queries.
const COLUMNS: &str = "id, tenant_id, recipient, type, message, metadata, read_at, created_at";

/// A `notifications` row as stored
#[derive(Debug, FromRow)]
struct NotificationRow {
    id: String,
    tenant_id: Option<String>,
    recipient: String,
    #[sqlx(rename = "type")]
    notification_type: String,
    message: String,
    metadata: Option<String>,
    read_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<NotificationRow> for NotificationRecord {
    type Error = DomainError;

    fn try_from(row: NotificationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            metadata: decode_metadata(row.metadata.as_deref())?,
            id: row.id,
            tenant_id: row.tenant_id,
            recipient: row.recipient,
            notification_type: row.notification_type,
            message: row.message,
            read_at: row.read_at,
            created_at: row.created_at,
        })
    }
}

/// Result of the conditional `read_at IS NULL` update
#[derive(Debug, PartialEq)]
enum Receipt {
    /// This call wrote the receipt
    Written(NotificationRecord),
    /// Another call wrote the receipt between the read and the update
    Lost,
}

fn settle_receipt(
    mut notification: NotificationRecord,
    read_at: DateTime<Utc>,
    rows_affected: u64,
) -> Receipt {
    if rows_affected == 0 {
        return Receipt::Lost;
    }

    notification.mark_read(read_at);
    Receipt::Written(notification)
}

/// PostgreSQL implementation of NotificationRepository backed by `notifications`
#[derive(Debug, Clone)]
pub struct PostgresNotificationRepository {
    pool: PgPool,
}

impl PostgresNotificationRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_for_recipient(
        &self,
        notification_id: &str,
        recipient: &str,
    ) -> Result<Option<NotificationRecord>, DomainError> {
        let query = format!("SELECT {COLUMNS} FROM notifications WHERE id = $1 AND recipient = $2");
        let row = sqlx::query_as::<_, NotificationRow>(&query)
            .bind(notification_id)
            .bind(recipient)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get notification: {}", e)))?;

        row.map(NotificationRecord::try_from).transpose()
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn create_notification(&self, record: NotificationRecord) -> Result<(), DomainError> {
        let metadata = encode_metadata(record.metadata.as_ref())?;

        sqlx::query(
            r#"
            INSERT INTO notifications (id, tenant_id, recipient, type, message, metadata,
                                       read_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&record.id)
        .bind(&record.tenant_id)
        .bind(&record.recipient)
        .bind(&record.notification_type)
        .bind(&record.message)
        .bind(metadata)
        .bind(record.read_at)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::from_insert("Notification", &record.id, e))?;

        debug!(recipient = %record.recipient, notification_type = %record.notification_type, "Created notification");
        Ok(())
    }

    async fn list_notifications(
        &self,
        recipient: &str,
        limit: usize,
    ) -> Result<Vec<NotificationRecord>, DomainError> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE recipient = $1 \
             ORDER BY created_at DESC \
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, NotificationRow>(&query)
            .bind(recipient)
            .bind(limit_param(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list notifications: {}", e)))?;

        rows.into_iter().map(NotificationRecord::try_from).collect()
    }

    async fn mark_notification_read(
        &self,
        notification_id: &str,
        recipient: &str,
    ) -> Result<Option<NotificationRecord>, DomainError> {
        let Some(notification) = self.find_for_recipient(notification_id, recipient).await? else {
            return Ok(None);
        };

        if notification.is_read() {
            return Ok(Some(notification));
        }

        let read_at = timestamp::now();
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET read_at = $3
            WHERE id = $1 AND recipient = $2 AND read_at IS NULL
            "#,
        )
        .bind(notification_id)
        .bind(recipient)
        .bind(read_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to mark notification read: {}", e)))?;

        match settle_receipt(notification, read_at, result.rows_affected()) {
            Receipt::Written(notification) => Ok(Some(notification)),
            Receipt::Lost => {
                debug!(notification_id, "Read receipt already set by a concurrent call");
                self.find_for_recipient(notification_id, recipient).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn row() -> NotificationRow {
        NotificationRow {
            id: "n1".to_string(),
            tenant_id: Some("t1".to_string()),
            recipient: "alice".to_string(),
            notification_type: "share.granted".to_string(),
            message: "Prompt shared with you".to_string(),
            metadata: Some(r#"{"prompt_id":"p1"}"#.to_string()),
            read_at: None,
            created_at: timestamp::now(),
        }
    }

    #[test]
    fn test_row_decodes_into_record() {
        let row = row();
        let created_at = row.created_at;
        let record = NotificationRecord::try_from(row).unwrap();

        assert_eq!(record.id, "n1");
        assert_eq!(record.tenant_id.as_deref(), Some("t1"));
        assert_eq!(record.notification_type, "share.granted");
        assert_eq!(record.metadata.unwrap()["prompt_id"], json!("p1"));
        assert!(record.read_at.is_none());
        assert_eq!(record.created_at, created_at);
    }

    #[test]
    fn test_row_without_tenant_or_metadata() {
        let row = NotificationRow {
            tenant_id: None,
            metadata: None,
            ..row()
        };
        let record = NotificationRecord::try_from(row).unwrap();

        assert!(record.tenant_id.is_none());
        assert!(record.metadata.is_none());
    }

    #[test]
    fn test_row_with_malformed_metadata_is_storage_error() {
        let row = NotificationRow {
            metadata: Some("not json".to_string()),
            ..row()
        };

        assert!(matches!(
            NotificationRecord::try_from(row),
            Err(DomainError::Storage { .. })
        ));
    }

    #[test]
    fn test_receipt_written_when_update_hits_row() {
        let unread = NotificationRecord::try_from(row()).unwrap();
        let read_at = timestamp::now();

        match settle_receipt(unread, read_at, 1) {
            Receipt::Written(notification) => assert_eq!(notification.read_at, Some(read_at)),
            Receipt::Lost => panic!("Expected the receipt to be written"),
        }
    }

    #[test]
    fn test_receipt_lost_when_update_hits_nothing() {
        let unread = NotificationRecord::try_from(row()).unwrap();

        assert_eq!(settle_receipt(unread, timestamp::now(), 0), Receipt::Lost);
    }

    #[test]
    fn test_written_receipt_keeps_earlier_read() {
        let first = timestamp::now() - Duration::minutes(1);
        let already_read = NotificationRecord::try_from(NotificationRow {
            read_at: Some(first),
            ..row()
        })
        .unwrap();

        match settle_receipt(already_read, timestamp::now(), 1) {
            Receipt::Written(notification) => assert_eq!(notification.read_at, Some(first)),
            Receipt::Lost => panic!("Expected the stored receipt"),
        }
    }
}
