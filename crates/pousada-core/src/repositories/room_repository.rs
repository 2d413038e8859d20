//! Room repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Room;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list_active(&self, accommodation_id: &Uuid) -> Result<Vec<Room>, DomainError>;
    async fn find_owned(&self, owner_id: &Uuid, id: &Uuid) -> Result<Option<Room>, DomainError>;
    /// Active rooms under active accommodations of the property.
    async fn count_active_for_property(&self, property_id: &Uuid) -> Result<i64, DomainError>;
    async fn number_taken(&self, accommodation_id: &Uuid, number: &str) -> Result<bool, DomainError>;
    async fn create(&self, room: &Room) -> Result<Room, DomainError>;
    async fn deactivate(&self, id: &Uuid) -> Result<(), DomainError>;
}
