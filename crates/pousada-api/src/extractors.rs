//! Request extractors

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::{header, request::Parts},
};
use std::convert::Infallible;

use pousada_core::domain::{PropertyOverview, User};

use crate::error::ApiError;
use crate::middleware::domain::ResolvedProperty;
use crate::state::AppState;

/// JSON body whose rejections render as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string whose rejections render as [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Path parameters; unparsable ids are reported as not found.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// The active user behind `Authorization: Bearer <access token>`.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Authentication credentials were not provided".into()))?;

        let user = state.auth.authenticate(token).await?;
        Ok(CurrentUser(user))
    }
}

/// Property attached by the domain middleware, if the host matched one.
pub struct DomainProperty(pub Option<PropertyOverview>);

impl<S: Send + Sync> FromRequestParts<S> for DomainProperty {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(DomainProperty(
            parts.extensions.get::<ResolvedProperty>().map(|p| p.0.clone()),
        ))
    }
}
