//! In-memory share registry

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{DomainError, ShareRecord, ShareRepository};

/// In-memory implementation of ShareRepository
#[derive(Debug, Default)]
pub struct InMemoryShareRepository {
    shares: RwLock<HashMap<String, ShareRecord>>,
}

impl InMemoryShareRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShareRepository for InMemoryShareRepository {
    async fn add_share(&self, record: ShareRecord) -> Result<(), DomainError> {
        let mut shares = self
            .shares
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        if shares.contains_key(&record.id) {
            return Err(DomainError::conflict(format!(
                "Share with ID '{}' already exists",
                record.id
            )));
        }

        shares.insert(record.id.clone(), record);
        Ok(())
    }

    async fn list_shares(
        &self,
        prompt_id: &str,
        tenant_id: &str,
    ) -> Result<Vec<ShareRecord>, DomainError> {
        let shares = self
            .shares
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(shares
            .values()
            .filter(|s| s.prompt_id == prompt_id && s.tenant_id == tenant_id)
            .cloned()
            .collect())
    }

    async fn remove_share(&self, share_id: &str, tenant_id: &str) -> Result<bool, DomainError> {
        let mut shares = self
            .shares
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        let owned = shares
            .get(share_id)
            .is_some_and(|share| share.tenant_id == tenant_id);

        if !owned {
            return Ok(false);
        }

        Ok(shares.remove(share_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ShareRole, ShareTargetType};

    fn share(id: &str, tenant_id: &str) -> ShareRecord {
        ShareRecord::new(
            id,
            "p1",
            tenant_id,
            ShareTargetType::User,
            "bob",
            ShareRole::Editor,
            "alice",
        )
    }

    #[tokio::test]
    async fn test_list_on_empty_store() {
        let repo = InMemoryShareRepository::new();

        let listed = repo.list_shares("p1", "t1").await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_grants_are_allowed() {
        let repo = InMemoryShareRepository::new();

        repo.add_share(share("s1", "t1")).await.unwrap();
        repo.add_share(share("s2", "t1")).await.unwrap();

        let mut listed = repo.list_shares("p1", "t1").await.unwrap();
        listed.sort_by(|a, b| a.id.cmp(&b.id));

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].target_identifier, listed[1].target_identifier);
        assert_eq!(listed[0].target_type, listed[1].target_type);
    }

    #[tokio::test]
    async fn test_list_scoped_to_tenant() {
        let repo = InMemoryShareRepository::new();

        repo.add_share(share("s1", "t1")).await.unwrap();
        repo.add_share(share("s2", "t2")).await.unwrap();

        let listed = repo.list_shares("p1", "t1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "s1");
    }

    #[tokio::test]
    async fn test_remove_blocks_cross_tenant_delete() {
        let repo = InMemoryShareRepository::new();
        repo.add_share(share("s1", "t1")).await.unwrap();

        assert!(!repo.remove_share("s1", "t2").await.unwrap());
        assert_eq!(repo.list_shares("p1", "t1").await.unwrap().len(), 1);

        assert!(repo.remove_share("s1", "t1").await.unwrap());
        assert!(repo.list_shares("p1", "t1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_share() {
        let repo = InMemoryShareRepository::new();

        assert!(!repo.remove_share("missing", "t1").await.unwrap());
    }
}
