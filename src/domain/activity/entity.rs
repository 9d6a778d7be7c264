//! Prompt activity log entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::metadata::Metadata;
use crate::domain::timestamp;

/// Default page size for activity listings
pub const DEFAULT_ACTIVITY_LIMIT: usize = 100;

/// One action taken against a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    pub prompt_id: String,
    pub tenant_id: String,
    /// Who performed the action; system actions carry no actor
    pub actor: Option<String>,
    pub action: String,
    pub metadata: Option<Metadata>,
    pub created_at: DateTime<Utc>,
}

impl ActivityRecord {
    pub fn new(
        id: impl Into<String>,
        prompt_id: impl Into<String>,
        tenant_id: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt_id: prompt_id.into(),
            tenant_id: tenant_id.into(),
            actor: None,
            action: action.into(),
            metadata: None,
            created_at: timestamp::now(),
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = timestamp::truncate(created_at);
        self
    }
}
