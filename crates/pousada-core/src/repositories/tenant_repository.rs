//! Tenant repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Tenant;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError>;
    async fn slug_exists(&self, slug: &str) -> Result<bool, DomainError>;
    /// Oldest active tenant owned by the user.
    async fn first_owned_by(&self, owner_id: &Uuid) -> Result<Option<Tenant>, DomainError>;
}
