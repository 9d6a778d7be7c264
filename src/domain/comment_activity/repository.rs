//! Comment activity repository trait

use async_trait::async_trait;

use super::CommentActivityRecord;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Append-only store of comment activity. Reads are served elsewhere.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommentActivityRepository: Send + Sync {
    /// Appends a record
    async fn log_comment_activity(&self, record: CommentActivityRecord)
        -> Result<(), DomainError>;
}
