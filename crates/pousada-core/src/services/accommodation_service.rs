// ============================================================================
// Pousada Core - Accommodation Service
// File: crates/pousada-core/src/services/accommodation_service.rs
// ============================================================================
//! Accommodation (room type) and room management, scoped by the parent
//! property's owner

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use pousada_shared::{Page, Pagination};

use crate::domain::{Accommodation, AccommodationInput, AccommodationPatch, Room, RoomInput, User};
use crate::error::DomainError;
use crate::repositories::{AccommodationRepository, PropertyRepository, RoomRepository};

pub struct AccommodationService {
    accommodations: Arc<dyn AccommodationRepository>,
    properties: Arc<dyn PropertyRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl AccommodationService {
    pub fn new(
        accommodations: Arc<dyn AccommodationRepository>,
        properties: Arc<dyn PropertyRepository>,
        rooms: Arc<dyn RoomRepository>,
    ) -> Self {
        Self { accommodations, properties, rooms }
    }

    pub async fn list(
        &self,
        owner: &User,
        property_id: Option<Uuid>,
        pagination: Pagination,
    ) -> Result<Page<Accommodation>, DomainError> {
        let pagination = pagination.normalized();
        let (rows, count) = self
            .accommodations
            .list_owned(&owner.id, property_id, pagination)
            .await?;
        Ok(Page::new(rows, count, pagination))
    }

    pub async fn create(&self, owner: &User, input: AccommodationInput) -> Result<Accommodation, DomainError> {
        input.validate()?;
        let property_id = input
            .property_id
            .ok_or_else(|| DomainError::invalid("property_id", "This field is required"))?;

        // Foreign and inactive properties look the same as missing ones.
        self.properties
            .find_owned(&owner.id, &property_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))?;

        let accommodation = Accommodation::create(property_id, input);
        let created = self.accommodations.create(&accommodation).await?;
        info!("Accommodation {} created under property {}", created.id, property_id);
        Ok(created)
    }

    pub async fn retrieve(&self, owner: &User, id: &Uuid) -> Result<Accommodation, DomainError> {
        self.accommodations
            .find_owned(&owner.id, id)
            .await?
            .ok_or_else(|| DomainError::not_found("Accommodation"))
    }

    /// Full update (PUT). The parent property cannot change.
    pub async fn replace(
        &self,
        owner: &User,
        id: &Uuid,
        input: AccommodationInput,
    ) -> Result<Accommodation, DomainError> {
        input.validate()?;
        let mut accommodation = self.retrieve(owner, id).await?;
        accommodation.apply(input);
        self.accommodations.update(&accommodation).await
    }

    pub async fn patch(
        &self,
        owner: &User,
        id: &Uuid,
        patch: AccommodationPatch,
    ) -> Result<Accommodation, DomainError> {
        let mut accommodation = self.retrieve(owner, id).await?;
        let mut input = AccommodationInput::from(&accommodation);
        patch.merge_into(&mut input);
        input.validate()?;
        accommodation.apply(input);
        self.accommodations.update(&accommodation).await
    }

    pub async fn soft_delete(&self, owner: &User, id: &Uuid) -> Result<(), DomainError> {
        let mut accommodation = self.retrieve(owner, id).await?;
        accommodation.soft_delete();
        self.accommodations.update(&accommodation).await?;
        info!("Accommodation {} soft-deleted by user {}", id, owner.id);
        Ok(())
    }

    /// Active rooms of an owned accommodation.
    pub async fn rooms(&self, owner: &User, accommodation_id: &Uuid) -> Result<Vec<Room>, DomainError> {
        let accommodation = self.retrieve(owner, accommodation_id).await?;
        self.rooms.list_active(&accommodation.id).await
    }

    pub async fn add_room(
        &self,
        owner: &User,
        accommodation_id: &Uuid,
        input: RoomInput,
    ) -> Result<Room, DomainError> {
        input.validate()?;
        let accommodation = self.retrieve(owner, accommodation_id).await?;

        let number = input.number.trim();
        if self.rooms.number_taken(&accommodation.id, number).await? {
            return Err(DomainError::invalid("number", "Room number already exists"));
        }

        let room = Room::create(accommodation.id, input);
        self.rooms.create(&room).await
    }

    pub async fn deactivate_room(&self, owner: &User, room_id: &Uuid) -> Result<(), DomainError> {
        let room = self
            .rooms
            .find_owned(&owner.id, room_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room"))?;
        self.rooms.deactivate(&room.id).await?;
        info!("Room {} deactivated by user {}", room.id, owner.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccommodationType, Property, PropertyInput, PropertyOverview};
    use crate::repositories::{
        MockAccommodationRepository, MockPropertyRepository, MockRoomRepository,
    };
    use rust_decimal_macros::dec;

    fn owner() -> User {
        User::new("Ana".into(), "Silva".into(), "ana@pousada.com".into(), "hash".into()).unwrap()
    }

    fn input(property_id: Option<Uuid>) -> AccommodationInput {
        AccommodationInput {
            property_id,
            name: "Standard".into(),
            description: Some("Quarto padrão".into()),
            accommodation_type: AccommodationType::Room,
            base_price: dec!(200.00),
            max_guests: 2,
        }
    }

    fn service(
        accommodations: MockAccommodationRepository,
        properties: MockPropertyRepository,
        rooms: MockRoomRepository,
    ) -> AccommodationService {
        AccommodationService::new(Arc::new(accommodations), Arc::new(properties), Arc::new(rooms))
    }

    #[tokio::test]
    async fn test_create_under_owned_property() {
        let user = owner();
        let property = Property::create(
            Uuid::new_v4(),
            user.id,
            "pousada-sol".into(),
            PropertyInput { name: "Pousada Sol".into(), ..Default::default() },
        );
        let property_id = property.id;

        let mut properties = MockPropertyRepository::new();
        properties.expect_find_owned().returning(move |_, _| {
            Ok(Some(PropertyOverview { property: property.clone(), accommodations_count: 0 }))
        });
        let mut accommodations = MockAccommodationRepository::new();
        accommodations
            .expect_create()
            .withf(move |a| a.property_id == property_id && a.is_active)
            .times(1)
            .returning(|a| Ok(a.clone()));

        let created = service(accommodations, properties, MockRoomRepository::new())
            .create(&user, input(Some(property_id)))
            .await
            .unwrap();
        assert_eq!(created.base_price, dec!(200.00));
    }

    #[tokio::test]
    async fn test_create_under_foreign_property_is_not_found() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_owned().returning(|_, _| Ok(None));
        let mut accommodations = MockAccommodationRepository::new();
        accommodations.expect_create().never();

        let err = service(accommodations, properties, MockRoomRepository::new())
            .create(&owner(), input(Some(Uuid::new_v4())))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_requires_property_id() {
        let err = service(
            MockAccommodationRepository::new(),
            MockPropertyRepository::new(),
            MockRoomRepository::new(),
        )
        .create(&owner(), input(None))
        .await
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "property_id", .. }));
    }

    #[tokio::test]
    async fn test_soft_delete_sets_flag_and_timestamp() {
        let existing = Accommodation::create(Uuid::new_v4(), input(None));
        let id = existing.id;
        let mut accommodations = MockAccommodationRepository::new();
        accommodations
            .expect_find_owned()
            .returning(move |_, _| Ok(Some(existing.clone())));
        accommodations
            .expect_update()
            .withf(|a| !a.is_active && a.deleted_at.is_some())
            .times(1)
            .returning(|a| Ok(a.clone()));

        service(accommodations, MockPropertyRepository::new(), MockRoomRepository::new())
            .soft_delete(&owner(), &id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_patch_rejects_negative_price() {
        let existing = Accommodation::create(Uuid::new_v4(), input(None));
        let id = existing.id;
        let mut accommodations = MockAccommodationRepository::new();
        accommodations
            .expect_find_owned()
            .returning(move |_, _| Ok(Some(existing.clone())));
        accommodations.expect_update().never();

        let patch = AccommodationPatch { base_price: Some(dec!(-1)), ..Default::default() };
        let err = service(accommodations, MockPropertyRepository::new(), MockRoomRepository::new())
            .patch(&owner(), &id, patch)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_add_room_rejects_duplicate_number() {
        let existing = Accommodation::create(Uuid::new_v4(), input(None));
        let id = existing.id;
        let mut accommodations = MockAccommodationRepository::new();
        accommodations
            .expect_find_owned()
            .returning(move |_, _| Ok(Some(existing.clone())));
        let mut rooms = MockRoomRepository::new();
        rooms.expect_number_taken().returning(|_, number| Ok(number == "101"));
        rooms.expect_create().returning(|r| Ok(r.clone()));

        let svc = service(accommodations, MockPropertyRepository::new(), rooms);
        let dup = svc
            .add_room(&owner(), &id, RoomInput { number: "101".into(), floor: 1 })
            .await;
        assert!(matches!(dup, Err(DomainError::InvalidField { field: "number", .. })));

        let room = svc
            .add_room(&owner(), &id, RoomInput { number: "102".into(), floor: 1 })
            .await
            .unwrap();
        assert_eq!(room.accommodation_id, id);
    }

    #[tokio::test]
    async fn test_deactivate_unknown_room() {
        let mut rooms = MockRoomRepository::new();
        rooms.expect_find_owned().returning(|_, _| Ok(None));
        rooms.expect_deactivate().never();

        let err = service(MockAccommodationRepository::new(), MockPropertyRepository::new(), rooms)
            .deactivate_room(&owner(), &Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
