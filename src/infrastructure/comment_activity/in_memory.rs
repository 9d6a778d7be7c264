//! In-memory comment activity repository

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{CommentActivityRecord, CommentActivityRepository, DomainError};

/// In-memory implementation of CommentActivityRepository
#[derive(Debug, Default)]
pub struct InMemoryCommentActivityRepository {
    records: RwLock<Vec<CommentActivityRecord>>,
}

impl InMemoryCommentActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records logged for a comment, in insertion order
    pub fn list_for_comment(
        &self,
        comment_id: &str,
    ) -> Result<Vec<CommentActivityRecord>, DomainError> {
        let records = self
            .records
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(records
            .iter()
            .filter(|r| r.comment_id == comment_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CommentActivityRepository for InMemoryCommentActivityRepository {
    async fn log_comment_activity(
        &self,
        record: CommentActivityRecord,
    ) -> Result<(), DomainError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        if records.iter().any(|r| r.id == record.id) {
            return Err(DomainError::conflict(format!(
                "Comment activity with ID '{}' already exists",
                record.id
            )));
        }

        records.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_metadata_reads_back_unchanged() {
        let repo = InMemoryCommentActivityRepository::new();
        let metadata = json!({"reason": "edit"}).as_object().cloned().unwrap();
        let record = CommentActivityRecord::new("ca1", "c1", "p1", "t1", "comment.edited", "bob")
            .with_metadata(metadata);

        repo.log_comment_activity(record).await.unwrap();

        let stored = repo.list_for_comment("c1").unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(
            serde_json::Value::Object(stored[0].metadata.clone().unwrap()),
            json!({"reason": "edit"})
        );
        assert_eq!(stored[0].actor, "bob");
    }

    #[tokio::test]
    async fn test_records_are_scoped_to_comment() {
        let repo = InMemoryCommentActivityRepository::new();

        repo.log_comment_activity(CommentActivityRecord::new(
            "ca1", "c1", "p1", "t1", "comment.added", "bob",
        ))
        .await
        .unwrap();
        repo.log_comment_activity(CommentActivityRecord::new(
            "ca2", "c2", "p1", "t1", "comment.added", "carol",
        ))
        .await
        .unwrap();

        assert_eq!(repo.list_for_comment("c1").unwrap().len(), 1);
        assert!(repo.list_for_comment("c3").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_conflict() {
        let repo = InMemoryCommentActivityRepository::new();
        let record = CommentActivityRecord::new("ca1", "c1", "p1", "t1", "comment.added", "bob");

        repo.log_comment_activity(record.clone()).await.unwrap();
        let result = repo.log_comment_activity(record).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }
}
