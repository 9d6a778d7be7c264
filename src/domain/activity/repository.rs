//! Activity log repository trait

use async_trait::async_trait;

use super::ActivityRecord;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Append-only store of prompt activity
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Appends a record
    async fn log_activity(&self, record: ActivityRecord) -> Result<(), DomainError>;

    /// Lists activity for a prompt within a tenant, newest first, at most `limit` records
    async fn list_activity(
        &self,
        prompt_id: &str,
        tenant_id: &str,
        limit: usize,
    ) -> Result<Vec<ActivityRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_activity_repository_propagates_faults() {
        let mut mock = MockActivityRepository::new();

        mock.expect_list_activity()
            .returning(|_, _, _| Err(DomainError::storage("connection refused")));

        let result = mock.list_activity("p1", "t1", 10).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
