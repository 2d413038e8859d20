//! Domain services (business logic)

pub mod auth_service;
pub mod property_service;
pub mod accommodation_service;
pub mod site_service;
pub mod dashboard_service;
pub mod maintenance_service;

pub use auth_service::{AuthService, AuthTokens, LoginResult, RegisterInput, RegisterResult, UserInfo};
pub use property_service::{PropertyDetail, PropertyService};
pub use accommodation_service::AccommodationService;
pub use site_service::SiteService;
pub use dashboard_service::DashboardService;
pub use maintenance_service::{dev_fixtures, MaintenanceService, SEED_PASSWORD};

const MAX_SLUG_ATTEMPTS: u32 = 50;

/// `base`, then `base-2`, `base-3`, ...
fn slug_candidate(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}
