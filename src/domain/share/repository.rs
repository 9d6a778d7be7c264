//! Share registry repository trait

use async_trait::async_trait;

use super::ShareRecord;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Persistence for prompt shares
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ShareRepository: Send + Sync {
    /// Stores a grant without checking for an existing grant to the same target
    async fn add_share(&self, record: ShareRecord) -> Result<(), DomainError>;

    /// Lists every grant on a prompt within a tenant, in no particular order
    async fn list_shares(
        &self,
        prompt_id: &str,
        tenant_id: &str,
    ) -> Result<Vec<ShareRecord>, DomainError>;

    /// Deletes a grant owned by `tenant_id`. Returns true only if a row was removed.
    async fn remove_share(&self, share_id: &str, tenant_id: &str) -> Result<bool, DomainError>;
}
