// ============================================================================
// Pousada API - Auth Handlers
// File: crates/pousada-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (register, login, refresh)

use axum::{extract::State, http::StatusCode, Json};

use pousada_core::services::RegisterInput;

use crate::dto::{AuthResponse, LoginRequest, RefreshRequest, RegisterResponse};
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// Register handler - POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterInput>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let result = state.auth.register(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            tenant: result.tenant.into(),
            auth: AuthResponse::new(Some(result.user.into()), result.tokens),
        }),
    ))
}

/// Login handler - POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest("Email and password are required".into()));
    }
    let result = state.auth.login(&payload.email, &payload.password).await?;
    Ok(Json(AuthResponse::new(Some(result.user.into()), result.tokens)))
}

/// Refresh token handler - POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RefreshRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let tokens = state.auth.refresh(&payload.refresh_token).await?;
    Ok(Json(AuthResponse::new(None, tokens)))
}
