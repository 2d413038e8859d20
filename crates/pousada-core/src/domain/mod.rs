//! # Pousada Core - Domain Module
//!
//! Domain entities for the property-management backend.

pub mod user;
pub mod tenant;
pub mod property;
pub mod property_access;
pub mod accommodation;
pub mod room;
pub mod reservation;
pub mod dashboard;
mod validation;

// Re-export all entities and enums
pub use user::{User, UserSummary};
pub use tenant::{Tenant, TenantMembership, TenantRole};
pub use property::{Property, PropertyInput, PropertyOverview, PropertyPatch};
pub use property_access::{AccessRole, PropertyAccess};
pub use accommodation::{Accommodation, AccommodationInput, AccommodationPatch, AccommodationType};
pub use room::{Room, RoomInput};
pub use reservation::ReservationStatus;
pub use dashboard::{DailyFigures, DashboardStats};
