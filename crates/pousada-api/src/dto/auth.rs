//! Auth payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pousada_core::domain::Tenant;
use pousada_core::services::{AuthTokens, UserInfo};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<UserInfo> for UserDto {
    fn from(user: UserInfo) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TenantDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<Tenant> for TenantDto {
    fn from(tenant: Tenant) -> Self {
        Self { id: tenant.id, name: tenant.name, slug: tenant.slug }
    }
}

/// Token pair as returned by login, refresh and register.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

impl AuthResponse {
    pub fn new(user: Option<UserDto>, tokens: AuthTokens) -> Self {
        Self {
            user,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer",
            expires_in: tokens.expires_in,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub tenant: TenantDto,
    #[serde(flatten)]
    pub auth: AuthResponse,
}
