//! Public current-property endpoint

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::dto::PublicPropertyDto;
use crate::error::ApiError;
use crate::extractors::{ApiQuery, DomainProperty};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SlugQuery {
    pub slug: Option<String>,
}

/// GET /api/v1/pousada/?slug=<slug>
pub async fn current_property(
    State(state): State<AppState>,
    DomainProperty(domain_property): DomainProperty,
    ApiQuery(query): ApiQuery<SlugQuery>,
) -> Result<Json<PublicPropertyDto>, ApiError> {
    let overview = state
        .site
        .current(domain_property, query.slug.as_deref())
        .await?;
    Ok(Json(overview.into()))
}
