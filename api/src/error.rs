//! Unified error types for the Library API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Persistence errors raised by ports
//! - `BusinessError`: Violations of catalog rules (e.g. duplicate ISBN)
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)
//!
//! Every error reaches the caller as an `ApiErrors` body: a `kind`
//! discriminator plus an ordered list of messages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message reported when a book is saved with an ISBN already in the catalog
pub const DUPLICATE_ISBN_MESSAGE: &str = "ISBN already registered.";

/// Domain layer errors - raised by repository ports
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// A catalog rule was violated. Carries exactly one user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BusinessError(pub String);

impl BusinessError {
    pub fn duplicate_isbn() -> Self {
        Self(DUPLICATE_ISBN_MESSAGE.to_string())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Application layer errors - used by services and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Business(#[from] BusinessError),

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Discriminator for the error body returned to API callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Business,
    NotFound,
    Internal,
}

/// Error response body: every failure is a list of messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrors {
    pub kind: ErrorKind,
    pub errors: Vec<String>,
}

impl ApiErrors {
    /// Field validation failures, in the order they were detected
    pub fn validation(messages: Vec<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            errors: messages,
        }
    }

    pub fn business(error: &BusinessError) -> Self {
        Self {
            kind: ErrorKind::Business,
            errors: vec![error.message().to_string()],
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            errors: vec![message.into()],
        }
    }

    pub fn internal() -> Self {
        Self {
            kind: ErrorKind::Internal,
            errors: vec!["Internal server error".to_string()],
        }
    }
}

impl AppError {
    /// Map this error to an HTTP status and the body shown to the caller
    pub fn to_api_errors(&self) -> (StatusCode, ApiErrors) {
        match self {
            AppError::Validation(messages) => {
                (StatusCode::BAD_REQUEST, ApiErrors::validation(messages.clone()))
            }
            AppError::Business(e) => (StatusCode::BAD_REQUEST, ApiErrors::business(e)),
            // A store-level uniqueness conflict is the same rule violation
            AppError::Domain(DomainError::AlreadyExists(_)) => (
                StatusCode::BAD_REQUEST,
                ApiErrors::business(&BusinessError::duplicate_isbn()),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrors::not_found(msg.clone())),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ApiErrors::internal())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_api_errors();
        (status, Json(body)).into_response()
    }
}
