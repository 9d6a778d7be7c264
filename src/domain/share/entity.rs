//! Prompt share entities

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::timestamp;
use crate::domain::DomainError;

/// Kind of identity a prompt is shared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareTargetType {
    User,
    Email,
    /// Every member of a tenant
    Tenant,
}

impl ShareTargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Email => "email",
            Self::Tenant => "tenant",
        }
    }
}

impl FromStr for ShareTargetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "email" => Ok(Self::Email),
            "tenant" => Ok(Self::Tenant),
            other => Err(DomainError::validation(format!(
                "Unknown share target type '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ShareTargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role granted by a share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareRole {
    Viewer,
    Editor,
    Approver,
}

impl ShareRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Approver => "approver",
        }
    }
}

impl FromStr for ShareRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewer" => Ok(Self::Viewer),
            "editor" => Ok(Self::Editor),
            "approver" => Ok(Self::Approver),
            other => Err(DomainError::validation(format!(
                "Unknown share role '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ShareRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A role grant on a prompt.
///
/// Several grants may target the same identity on the same prompt; this layer
/// does not deduplicate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub id: String,
    pub prompt_id: String,
    pub tenant_id: String,
    pub target_type: ShareTargetType,
    pub target_identifier: String,
    pub role: ShareRole,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShareRecord {
    pub fn new(
        id: impl Into<String>,
        prompt_id: impl Into<String>,
        tenant_id: impl Into<String>,
        target_type: ShareTargetType,
        target_identifier: impl Into<String>,
        role: ShareRole,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt_id: prompt_id.into(),
            tenant_id: tenant_id.into(),
            target_type,
            target_identifier: target_identifier.into(),
            role,
            created_by: created_by.into(),
            created_at: timestamp::now(),
            expires_at: None,
        }
    }

    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(timestamp::truncate(expires_at));
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = timestamp::truncate(created_at);
        self
    }

    /// A share without expiry never expires
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}
