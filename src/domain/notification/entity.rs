//! Notification entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::metadata::Metadata;
use crate::domain::timestamp;

/// Default page size for inbox listings
pub const DEFAULT_NOTIFICATION_LIMIT: usize = 50;

/// A message in a recipient's inbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    /// Global notifications are not bound to a tenant
    pub tenant_id: Option<String>,
    pub recipient: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub message: String,
    pub metadata: Option<Metadata>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl NotificationRecord {
    pub fn new(
        id: impl Into<String>,
        recipient: impl Into<String>,
        notification_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tenant_id: None,
            recipient: recipient.into(),
            notification_type: notification_type.into(),
            message: message.into(),
            metadata: None,
            read_at: None,
            created_at: timestamp::now(),
        }
    }

    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_read_at(mut self, read_at: DateTime<Utc>) -> Self {
        self.read_at = Some(timestamp::truncate(read_at));
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = timestamp::truncate(created_at);
        self
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// Records the first read. Returns false, leaving `read_at` untouched, when
    /// the notification was already read.
    pub fn mark_read(&mut self, at: DateTime<Utc>) -> bool {
        if self.read_at.is_some() {
            return false;
        }

        self.read_at = Some(timestamp::truncate(at));
        true
    }
}
