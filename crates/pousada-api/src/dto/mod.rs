//! Request and response payloads

pub mod auth;
pub mod property;
pub mod accommodation;

pub use auth::{AuthResponse, LoginRequest, RefreshRequest, RegisterResponse, TenantDto, UserDto};
pub use property::{PropertyDetailDto, PropertyListItem, PublicPropertyDto};
pub use accommodation::AccommodationListQuery;
