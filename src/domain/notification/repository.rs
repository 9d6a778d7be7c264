//! Notification repository trait

use async_trait::async_trait;

use super::NotificationRecord;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Per-recipient inbox persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Stores a notification
    async fn create_notification(&self, record: NotificationRecord) -> Result<(), DomainError>;

    /// Lists a recipient's notifications across tenants, newest first
    async fn list_notifications(
        &self,
        recipient: &str,
        limit: usize,
    ) -> Result<Vec<NotificationRecord>, DomainError>;

    /// Sets the read receipt once.
    ///
    /// Returns `None` when no notification with this id belongs to `recipient`.
    /// An already-read notification is returned with its original `read_at`.
    async fn mark_notification_read(
        &self,
        notification_id: &str,
        recipient: &str,
    ) -> Result<Option<NotificationRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_notification_repository() {
        let mut mock = MockNotificationRepository::new();

        mock.expect_mark_notification_read()
            .returning(|_, _| Ok(None));
        mock.expect_list_notifications()
            .returning(|_, _| Ok(vec![]));

        assert!(mock.mark_notification_read("n1", "alice").await.unwrap().is_none());
        assert!(mock.list_notifications("alice", 50).await.unwrap().is_empty());
    }
}
