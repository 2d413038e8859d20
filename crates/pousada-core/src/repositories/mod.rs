//! Repository traits (ports)

pub mod user_repository;
pub mod tenant_repository;
pub mod property_repository;
pub mod accommodation_repository;
pub mod room_repository;
pub mod reservation_repository;
pub mod property_access_repository;
pub mod seed_repository;

pub use user_repository::UserRepository;
pub use tenant_repository::TenantRepository;
pub use property_repository::PropertyRepository;
pub use accommodation_repository::AccommodationRepository;
pub use room_repository::RoomRepository;
pub use reservation_repository::ReservationRepository;
pub use property_access_repository::PropertyAccessRepository;
pub use seed_repository::{SeedFixture, SeedRepository, SeedSummary};

#[cfg(any(test, feature = "mocks"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "mocks"))]
pub use tenant_repository::MockTenantRepository;
#[cfg(any(test, feature = "mocks"))]
pub use property_repository::MockPropertyRepository;
#[cfg(any(test, feature = "mocks"))]
pub use accommodation_repository::MockAccommodationRepository;
#[cfg(any(test, feature = "mocks"))]
pub use room_repository::MockRoomRepository;
#[cfg(any(test, feature = "mocks"))]
pub use reservation_repository::MockReservationRepository;
#[cfg(any(test, feature = "mocks"))]
pub use property_access_repository::MockPropertyAccessRepository;
#[cfg(any(test, feature = "mocks"))]
pub use seed_repository::MockSeedRepository;
