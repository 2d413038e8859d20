//! Accommodation repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use pousada_shared::Pagination;
use crate::domain::Accommodation;
use crate::error::DomainError;

/// Ownership is checked through the parent property (`properties.owner_id`).
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait AccommodationRepository: Send + Sync {
    async fn list_owned(
        &self,
        owner_id: &Uuid,
        property_id: Option<Uuid>,
        page: Pagination,
    ) -> Result<(Vec<Accommodation>, i64), DomainError>;
    async fn find_owned(&self, owner_id: &Uuid, id: &Uuid) -> Result<Option<Accommodation>, DomainError>;
    async fn create(&self, accommodation: &Accommodation) -> Result<Accommodation, DomainError>;
    async fn update(&self, accommodation: &Accommodation) -> Result<Accommodation, DomainError>;
}
