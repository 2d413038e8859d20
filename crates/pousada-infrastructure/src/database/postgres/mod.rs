//! PostgreSQL repository implementations

pub mod user_repo_impl;
pub mod tenant_repo_impl;
pub mod property_repo_impl;
pub mod accommodation_repo_impl;
pub mod room_repo_impl;
pub mod reservation_repo_impl;
pub mod property_access_repo_impl;
pub mod seed_repo_impl;

pub use user_repo_impl::PgUserRepository;
pub use tenant_repo_impl::PgTenantRepository;
pub use property_repo_impl::PgPropertyRepository;
pub use accommodation_repo_impl::PgAccommodationRepository;
pub use room_repo_impl::PgRoomRepository;
pub use reservation_repo_impl::PgReservationRepository;
pub use property_access_repo_impl::PgPropertyAccessRepository;
pub use seed_repo_impl::PgSeedRepository;

use pousada_core::error::DomainError;
use tracing::{error, warn};

pub(crate) const USERS_EMAIL_KEY: &str = "users_email_key";

/// Logs an sqlx failure and wraps it.
pub(crate) fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", action, e);
    DomainError::DatabaseError(e.to_string())
}

/// Like [`db_error`], but unique-constraint violations become field errors.
pub(crate) fn write_error(action: &str, e: sqlx::Error) -> DomainError {
    if let Some(constraint) = unique_violation(&e) {
        if let Some(conflict) = conflict_for(&constraint) {
            warn!("Unique violation on {} while {}", constraint, action);
            return conflict;
        }
    }
    db_error(action, e)
}

pub(crate) fn unique_violation(e: &sqlx::Error) -> Option<String> {
    match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => db.constraint().map(str::to_owned),
        _ => None,
    }
}

fn conflict_for(constraint: &str) -> Option<DomainError> {
    let (field, message) = match constraint {
        "tenants_slug_key" => ("tenant_name", "A tenant with this slug already exists"),
        "properties_active_slug_key" => ("slug", "A property with this slug already exists"),
        "properties_domain_key" => ("domain", "This domain is already in use"),
        "rooms_active_number_key" => ("number", "Room number already exists"),
        _ => return None,
    };
    Some(DomainError::invalid(field, message))
}
