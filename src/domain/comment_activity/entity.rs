//! Comment activity entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::metadata::Metadata;
use crate::domain::timestamp;

/// One action taken against a comment on a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentActivityRecord {
    pub id: String,
    pub comment_id: String,
    pub prompt_id: String,
    pub tenant_id: String,
    pub action: String,
    pub actor: String,
    pub metadata: Option<Metadata>,
    pub created_at: DateTime<Utc>,
}

impl CommentActivityRecord {
    pub fn new(
        id: impl Into<String>,
        comment_id: impl Into<String>,
        prompt_id: impl Into<String>,
        tenant_id: impl Into<String>,
        action: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            comment_id: comment_id.into(),
            prompt_id: prompt_id.into(),
            tenant_id: tenant_id.into(),
            action: action.into(),
            actor: actor.into(),
            metadata: None,
            created_at: timestamp::now(),
        }
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
