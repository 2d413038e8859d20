// ============================================================================
// Pousada API - Accommodation & Room Handlers
// File: crates/pousada-api/src/handlers/accommodations.rs
// ============================================================================

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use pousada_core::domain::{Accommodation, AccommodationInput, AccommodationPatch, Room, RoomInput};
use pousada_shared::Page;

use crate::dto::AccommodationListQuery;
use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiPath, ApiQuery, CurrentUser};
use crate::state::AppState;

/// GET /api/v1/accommodations/
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiQuery(query): ApiQuery<AccommodationListQuery>,
) -> Result<Json<Page<Accommodation>>, ApiError> {
    let page = state
        .accommodations
        .list(&user, query.property, query.pagination())
        .await?;
    Ok(Json(page))
}

/// POST /api/v1/accommodations/
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(payload): ApiJson<AccommodationInput>,
) -> Result<(StatusCode, Json<Accommodation>), ApiError> {
    let created = state.accommodations.create(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/accommodations/{id}/
pub async fn retrieve(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Accommodation>, ApiError> {
    Ok(Json(state.accommodations.retrieve(&user, &id).await?))
}

/// PUT /api/v1/accommodations/{id}/
pub async fn replace(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<AccommodationInput>,
) -> Result<Json<Accommodation>, ApiError> {
    Ok(Json(state.accommodations.replace(&user, &id, payload).await?))
}

/// PATCH /api/v1/accommodations/{id}/
pub async fn patch(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<AccommodationPatch>,
) -> Result<Json<Accommodation>, ApiError> {
    Ok(Json(state.accommodations.patch(&user, &id, payload).await?))
}

/// DELETE /api/v1/accommodations/{id}/
pub async fn destroy(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.accommodations.soft_delete(&user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/accommodations/{id}/rooms/
pub async fn list_rooms(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<Room>>, ApiError> {
    Ok(Json(state.accommodations.rooms(&user, &id).await?))
}

/// POST /api/v1/accommodations/{id}/rooms/
pub async fn create_room(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<RoomInput>,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    let room = state.accommodations.add_room(&user, &id, payload).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// DELETE /api/v1/rooms/{id}/
pub async fn deactivate_room(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.accommodations.deactivate_room(&user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
