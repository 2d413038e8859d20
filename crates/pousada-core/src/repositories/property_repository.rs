//! Property repository trait (port)
//!
//! Every read filters out soft-deleted rows.

use async_trait::async_trait;
use uuid::Uuid;
use pousada_shared::Pagination;
use crate::domain::{Property, PropertyAccess, PropertyOverview};
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Newest first, with the unpaginated total.
    async fn list_owned(
        &self,
        owner_id: &Uuid,
        page: Pagination,
    ) -> Result<(Vec<PropertyOverview>, i64), DomainError>;
    async fn find_owned(&self, owner_id: &Uuid, id: &Uuid) -> Result<Option<PropertyOverview>, DomainError>;
    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<PropertyOverview>, DomainError>;
    async fn find_active_by_domain(&self, domain: &str) -> Result<Option<PropertyOverview>, DomainError>;
    /// Oldest active property of the tenant.
    async fn first_active_of_tenant(&self, tenant_id: &Uuid) -> Result<Option<Property>, DomainError>;
    async fn slug_in_use(&self, slug: &str, except: Option<Uuid>) -> Result<bool, DomainError>;
    /// Inserts the property and its owner access grant atomically.
    async fn create(&self, property: &Property, access: &PropertyAccess) -> Result<Property, DomainError>;
    async fn update(&self, property: &Property) -> Result<Property, DomainError>;
}
