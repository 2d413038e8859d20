//! HTTP error type: maps domain failures to status codes and a JSON body of
//! the form `{"error": "...", "fields": {"name": ["..."]}}`.

use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use pousada_core::error::DomainError;

pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(fields) => {
                tracing::warn!("Validation failed: {:?}", fields);
                ErrorResponse { error: "Validation failed".to_string(), fields: Some(fields) }
            }
            ApiError::InternalError(detail) => {
                // The detail stays in the logs.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse { error: "Internal server error".to_string(), fields: None }
            }
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg) => {
                tracing::warn!("{}: {}", status, msg);
                ErrorResponse { error: msg, fields: None }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCredentials => ApiError::Unauthorized("Invalid email or password".into()),
            DomainError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            DomainError::UserNotActive => ApiError::Unauthorized("User account is disabled".into()),
            DomainError::EmailAlreadyExists(_) => ApiError::Conflict("Email already registered".into()),
            DomainError::NotFound(what) => ApiError::NotFound(format!("{} not found", what)),
            DomainError::Forbidden(msg) => ApiError::Forbidden(msg),
            DomainError::Validation(errors) => ApiError::Validation(field_errors(&errors)),
            DomainError::InvalidField { field, message } => {
                ApiError::Validation(BTreeMap::from([(field.to_string(), vec![message])]))
            }
            DomainError::PasswordHashError(detail)
            | DomainError::TokenGenerationError(detail)
            | DomainError::DatabaseError(detail)
            | DomainError::InternalError(detail) => ApiError::InternalError(detail),
        }
    }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value ({})", e.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    // Malformed ids are indistinguishable from unknown ones.
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound("Not found".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 8, message = "Postal code must have 8 or 9 characters"))]
        zip_code: String,
    }

    #[test]
    fn test_validation_errors_keep_field_messages() {
        let errors = Sample { zip_code: "123".into() }.validate().unwrap_err();
        let api: ApiError = DomainError::from(errors).into();
        match api {
            ApiError::Validation(fields) => assert_eq!(
                fields["zip_code"],
                vec!["Postal code must have 8 or 9 characters".to_string()]
            ),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from(DomainError::not_found("Property")).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(DomainError::Forbidden("x".into())).status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::from(DomainError::InvalidCredentials).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::from(DomainError::EmailAlreadyExists("a@b.com".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(DomainError::DatabaseError("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
