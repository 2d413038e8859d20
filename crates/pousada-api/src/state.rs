use std::sync::Arc;
use sqlx::PgPool;

use pousada_core::services::{
    AccommodationService, AuthService, DashboardService, PropertyService, SiteService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth: Arc<AuthService>,
    pub properties: Arc<PropertyService>,
    pub accommodations: Arc<AccommodationService>,
    pub site: Arc<SiteService>,
    pub dashboard: Arc<DashboardService>,
}
