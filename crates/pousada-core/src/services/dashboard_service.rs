// ============================================================================
// Pousada Core - Dashboard Service
// File: crates/pousada-core/src/services/dashboard_service.rs
// ============================================================================
//! Daily operating figures for a property owner

use std::sync::Arc;
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::dashboard::month_bounds;
use crate::domain::{DailyFigures, DashboardStats, Property, PropertyOverview, ReservationStatus, User};
use crate::error::DomainError;
use crate::repositories::{PropertyRepository, ReservationRepository, RoomRepository, TenantRepository};

pub struct DashboardService {
    properties: Arc<dyn PropertyRepository>,
    tenants: Arc<dyn TenantRepository>,
    rooms: Arc<dyn RoomRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl DashboardService {
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        tenants: Arc<dyn TenantRepository>,
        rooms: Arc<dyn RoomRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self { properties, tenants, rooms, reservations }
    }

    /// Stats for `today`. Uses the domain-bound property when present (the
    /// caller must own its tenant), else the caller's first active property.
    pub async fn stats(
        &self,
        user: &User,
        domain_property: Option<PropertyOverview>,
        today: NaiveDate,
    ) -> Result<DashboardStats, DomainError> {
        let property = self.resolve_property(user, domain_property).await?;
        let figures = self.figures(&property, today).await?;
        debug!("Dashboard figures for property {}: {:?}", property.id, figures);
        Ok(DashboardStats::from_figures(&property.name, &figures))
    }

    async fn resolve_property(
        &self,
        user: &User,
        domain_property: Option<PropertyOverview>,
    ) -> Result<Property, DomainError> {
        if let Some(found) = domain_property {
            let tenant = self
                .tenants
                .find_by_id(&found.property.tenant_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Tenant"))?;
            if !tenant.is_owned_by(&user.id) {
                warn!("User {} denied dashboard of property {}", user.id, found.property.id);
                return Err(DomainError::Forbidden("Not the owner of this property".into()));
            }
            return Ok(found.property);
        }

        let tenant = self
            .tenants
            .first_owned_by(&user.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Tenant"))?;
        self.properties
            .first_active_of_tenant(&tenant.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))
    }

    async fn figures(&self, property: &Property, today: NaiveDate) -> Result<DailyFigures, DomainError> {
        let id = &property.id;
        let (month_start, month_end) = month_bounds(today);

        Ok(DailyFigures {
            total_rooms: self.rooms.count_active_for_property(id).await?,
            checkins_today: self
                .reservations
                .count_arrivals(id, today, ReservationStatus::ARRIVING)
                .await?,
            checkouts_today: self
                .reservations
                .count_departures(id, today, ReservationStatus::DEPARTING)
                .await?,
            occupied_rooms: self
                .reservations
                .count_staying(id, today, ReservationStatus::OCCUPYING)
                .await?,
            revenue_month: self
                .reservations
                .revenue_by_check_in(id, month_start, month_end, ReservationStatus::VOIDED)
                .await?,
        })
    }
}
