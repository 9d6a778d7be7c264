//! In-memory notification repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::timestamp;
use crate::domain::{DomainError, NotificationRecord, NotificationRepository};

/// In-memory implementation of NotificationRepository
#[derive(Debug, Default)]
pub struct InMemoryNotificationRepository {
    notifications: RwLock<HashMap<String, NotificationRecord>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn create_notification(&self, record: NotificationRecord) -> Result<(), DomainError> {
        let mut notifications = self
            .notifications
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        if notifications.contains_key(&record.id) {
            return Err(DomainError::conflict(format!(
                "Notification with ID '{}' already exists",
                record.id
            )));
        }

        notifications.insert(record.id.clone(), record);
        Ok(())
    }

    async fn list_notifications(
        &self,
        recipient: &str,
        limit: usize,
    ) -> Result<Vec<NotificationRecord>, DomainError> {
        let notifications = self
            .notifications
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        let mut result: Vec<_> = notifications
            .values()
            .filter(|n| n.recipient == recipient)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result.truncate(limit);
        Ok(result)
    }

    async fn mark_notification_read(
        &self,
        notification_id: &str,
        recipient: &str,
    ) -> Result<Option<NotificationRecord>, DomainError> {
        let mut notifications = self
            .notifications
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        match notifications.get_mut(notification_id) {
            Some(notification) if notification.recipient == recipient => {
                notification.mark_read(timestamp::now());
                Ok(Some(notification.clone()))
            }
            _ => Ok(None),
        }
    }
}
