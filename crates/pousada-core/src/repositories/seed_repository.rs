//! Development dataset writer (port)

use async_trait::async_trait;
use crate::domain::{Accommodation, Property, PropertyAccess, Room, Tenant, TenantMembership, User};
use crate::error::DomainError;

/// One owner with everything they own in the development dataset.
#[derive(Debug, Clone)]
pub struct SeedFixture {
    pub user: User,
    pub tenant: Tenant,
    pub membership: TenantMembership,
    pub property: Property,
    pub access: PropertyAccess,
    pub accommodation: Accommodation,
    pub rooms: Vec<Room>,
}

/// Rows removed by the reset step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub properties_removed: u64,
    pub tenants_removed: u64,
    pub users_removed: u64,
}

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Deletes all properties, tenants and non-superuser users, then inserts
    /// the fixtures, in one transaction.
    async fn replace_all(&self, fixtures: &[SeedFixture]) -> Result<SeedSummary, DomainError>;
}
