//! In-memory activity log repository

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{ActivityRecord, ActivityRepository, DomainError};

/// In-memory implementation of ActivityRepository
#[derive(Debug, Default)]
pub struct InMemoryActivityRepository {
    records: RwLock<Vec<ActivityRecord>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn log_activity(&self, record: ActivityRecord) -> Result<(), DomainError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        if records.iter().any(|r| r.id == record.id) {
            return Err(DomainError::conflict(format!(
                "Activity with ID '{}' already exists",
                record.id
            )));
        }

        records.push(record);
        Ok(())
    }

    async fn list_activity(
        &self,
        prompt_id: &str,
        tenant_id: &str,
        limit: usize,
    ) -> Result<Vec<ActivityRecord>, DomainError> {
        let records = self
            .records
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        let mut result: Vec<_> = records
            .iter()
            .filter(|r| r.prompt_id == prompt_id && r.tenant_id == tenant_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result.truncate(limit);
        Ok(result)
    }
}
