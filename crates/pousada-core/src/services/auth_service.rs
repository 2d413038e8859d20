// ============================================================================
// Pousada Core - Authentication Service
// File: crates/pousada-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service with login, signup and token management

use std::sync::Arc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use pousada_security::{JwtError, JwtService, PasswordError, PasswordService};
use pousada_shared::utils::{mask_email, slugify};

use crate::domain::{Tenant, TenantMembership, User};
use crate::error::DomainError;
use crate::repositories::{TenantRepository, UserRepository};

use super::{slug_candidate, MAX_SLUG_ATTEMPTS};

/// Authentication service for handling login/signup flows
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tenants: Arc<dyn TenantRepository>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tenants: Arc<dyn TenantRepository>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self { users, tenants, jwt }
    }

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, DomainError> {
        info!("Login attempt for email: {}", mask_email(email));

        // 1. Find user by email
        let user = self.users.find_by_email(email).await?.ok_or_else(|| {
            warn!("Login failed: email not found: {}", mask_email(email));
            DomainError::InvalidCredentials
        })?;

        // 2. Verify password before revealing account state
        let password_valid = PasswordService::verify(password, &user.password_hash)
            .map_err(|_| DomainError::InvalidCredentials)?;
        if !password_valid {
            warn!("Login failed: invalid password for: {}", mask_email(email));
            return Err(DomainError::InvalidCredentials);
        }

        // 3. Check if user can login
        if !user.can_login() {
            warn!("Login failed: inactive user {}", user.id);
            return Err(DomainError::UserNotActive);
        }

        let tokens = self.issue_tokens(&user.id)?;
        info!("Login successful for user {}", user.id);

        Ok(LoginResult { user: UserInfo::from(&user), tokens })
    }

    /// Sign up: creates the user, their tenant and the owner membership.
    pub async fn register(&self, input: RegisterInput) -> Result<RegisterResult, DomainError> {
        input.validate()?;
        info!("Registration attempt for email: {}", mask_email(&input.email));

        PasswordService::check_strength(
            &input.password,
            &[&input.email, &input.first_name, &input.last_name],
        )
        .map_err(|e| match e {
            PasswordError::TooShort => DomainError::invalid("password", "Password too short"),
            PasswordError::TooLong => DomainError::invalid("password", "Password too long"),
            PasswordError::TooWeak => DomainError::invalid("password", "Password too weak"),
            other => DomainError::PasswordHashError(other.to_string()),
        })?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            warn!("Registration failed: email already exists: {}", mask_email(&input.email));
            return Err(DomainError::EmailAlreadyExists(input.email));
        }

        let password_hash = PasswordService::hash(&input.password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;
        let user = User::new(input.first_name, input.last_name, input.email, password_hash)?;

        let slug = self.unique_tenant_slug(&input.tenant_name).await?;
        let tenant = Tenant::with_slug(user.id, input.tenant_name, slug)?;
        let membership = TenantMembership::owner(user.id, tenant.id);

        let created = self.users.create_account(&user, &tenant, &membership).await?;
        let tokens = self.issue_tokens(&created.id)?;

        info!("Registration successful: user {} tenant {}", created.id, tenant.slug);
        Ok(RegisterResult { user: UserInfo::from(&created), tenant, tokens })
    }

    /// Exchanges a refresh token for a fresh token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, DomainError> {
        let user_id = self.jwt.validate_refresh_token(refresh_token).map_err(unauthorized)?;
        let user = self.active_user(&user_id).await?;
        self.issue_tokens(&user.id)
    }

    /// Resolves the user behind a bearer access token.
    pub async fn authenticate(&self, access_token: &str) -> Result<User, DomainError> {
        let user_id = self.jwt.validate_access_token(access_token).map_err(unauthorized)?;
        self.active_user(&user_id).await
    }

    async fn active_user(&self, user_id: &Uuid) -> Result<User, DomainError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Unknown user".into()))?;
        if !user.can_login() {
            return Err(DomainError::UserNotActive);
        }
        Ok(user)
    }

    fn issue_tokens(&self, user_id: &Uuid) -> Result<AuthTokens, DomainError> {
        let access_token = self
            .jwt
            .generate_access_token(user_id)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;
        let refresh_token = self
            .jwt
            .generate_refresh_token(user_id)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;
        Ok(AuthTokens {
            access_token,
            refresh_token,
            expires_in: self.jwt.access_token_expiry(),
        })
    }

    async fn unique_tenant_slug(&self, name: &str) -> Result<String, DomainError> {
        let base = slugify(name);
        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let candidate = slug_candidate(&base, attempt);
            if !self.tenants.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }
        Err(DomainError::invalid("tenant_name", "Unable to generate a unique slug"))
    }
}

fn unauthorized(e: JwtError) -> DomainError {
    DomainError::Unauthorized(e.to_string())
}

/// Signup payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, max = 150, message = "First name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 150))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 2, max = 200, message = "Tenant name must be between 2 and 200 characters"))]
    pub tenant_name: String,
}

#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: UserInfo,
    pub tokens: AuthTokens,
}

/// Result of successful registration
#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub user: UserInfo,
    pub tenant: Tenant,
    pub tokens: AuthTokens,
}

/// User info returned in auth responses
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}
