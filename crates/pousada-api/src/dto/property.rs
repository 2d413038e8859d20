//! Property projections

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use pousada_core::domain::{Property, PropertyOverview, UserSummary};
use pousada_core::services::PropertyDetail;

/// Row of the owner's property list.
#[derive(Debug, Serialize)]
pub struct PropertyListItem {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub accommodations_count: i64,
}

impl From<PropertyOverview> for PropertyListItem {
    fn from(o: PropertyOverview) -> Self {
        let p = o.property;
        Self {
            id: p.id,
            name: p.name,
            slug: p.slug,
            city: p.city,
            state: p.state,
            country: p.country,
            is_active: p.is_active,
            created_at: p.created_at,
            accommodations_count: o.accommodations_count,
        }
    }
}

/// Every property field plus the owner summary.
#[derive(Debug, Serialize)]
pub struct PropertyDetailDto {
    #[serde(flatten)]
    pub property: Property,
    pub accommodations_count: i64,
    pub owner: UserSummary,
}

impl From<PropertyDetail> for PropertyDetailDto {
    fn from(detail: PropertyDetail) -> Self {
        Self {
            property: detail.overview.property,
            accommodations_count: detail.overview.accommodations_count,
            owner: detail.owner,
        }
    }
}

/// Guest-facing view: no owner, tenant or legal fields.
#[derive(Debug, Serialize)]
pub struct PublicPropertyDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: String,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub business_hours: Option<String>,
    pub primary_color: Option<String>,
    pub logo_url: Option<String>,
    pub accommodations_count: i64,
}

impl From<PropertyOverview> for PublicPropertyDto {
    fn from(o: PropertyOverview) -> Self {
        let p = o.property;
        Self {
            id: p.id,
            name: p.name,
            slug: p.slug,
            description: p.description,
            address: p.address,
            city: p.city,
            state: p.state,
            country: p.country,
            zip_code: p.zip_code,
            phone: p.phone,
            email: p.email,
            website: p.website,
            business_hours: p.business_hours,
            primary_color: p.primary_color,
            logo_url: p.logo_url,
            accommodations_count: o.accommodations_count,
        }
    }
}
