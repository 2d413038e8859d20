//! User repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Tenant, TenantMembership, User};
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    /// Inserts the user, their tenant and the owner membership atomically.
    async fn create_account(
        &self,
        user: &User,
        tenant: &Tenant,
        membership: &TenantMembership,
    ) -> Result<User, DomainError>;
}
