//! Owner dashboard

use axum::{extract::State, Json};
use chrono::Local;

use pousada_core::domain::DashboardStats;

use crate::error::ApiError;
use crate::extractors::{CurrentUser, DomainProperty};
use crate::state::AppState;

/// GET /api/v1/dashboard/stats/
pub async fn stats(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    DomainProperty(domain_property): DomainProperty,
) -> Result<Json<DashboardStats>, ApiError> {
    let today = Local::now().date_naive();
    let stats = state.dashboard.stats(&user, domain_property, today).await?;
    Ok(Json(stats))
}
