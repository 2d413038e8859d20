// ============================================================================
// Pousada API - Property Handlers
// File: crates/pousada-api/src/handlers/properties.rs
// ============================================================================

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use pousada_core::domain::{PropertyInput, PropertyPatch};
use pousada_shared::{Page, Pagination};

use crate::dto::{PropertyDetailDto, PropertyListItem, PublicPropertyDto};
use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiPath, ApiQuery, CurrentUser};
use crate::state::AppState;

/// GET /api/v1/properties/
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiQuery(pagination): ApiQuery<Pagination>,
) -> Result<Json<Page<PropertyListItem>>, ApiError> {
    let page = state.properties.list(&user, pagination).await?;
    Ok(Json(page.map(PropertyListItem::from)))
}

/// POST /api/v1/properties/
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(payload): ApiJson<PropertyInput>,
) -> Result<(StatusCode, Json<PropertyDetailDto>), ApiError> {
    let detail = state.properties.create(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(detail.into())))
}

/// GET /api/v1/properties/{id}/
pub async fn retrieve(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<PropertyDetailDto>, ApiError> {
    let detail = state.properties.retrieve(&user, &id).await?;
    Ok(Json(detail.into()))
}

/// PUT /api/v1/properties/{id}/
pub async fn replace(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<PropertyInput>,
) -> Result<Json<PropertyDetailDto>, ApiError> {
    let detail = state.properties.replace(&user, &id, payload).await?;
    Ok(Json(detail.into()))
}

/// PATCH /api/v1/properties/{id}/
pub async fn patch(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<PropertyPatch>,
) -> Result<Json<PropertyDetailDto>, ApiError> {
    let detail = state.properties.patch(&user, &id, payload).await?;
    Ok(Json(detail.into()))
}

/// DELETE /api/v1/properties/{id}/
pub async fn destroy(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.properties.soft_delete(&user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/public/properties/{slug}/
pub async fn public_detail(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<Json<PublicPropertyDto>, ApiError> {
    let overview = state.properties.public_by_slug(&slug).await?;
    Ok(Json(overview.into()))
}
