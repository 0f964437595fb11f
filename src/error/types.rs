/**
 * API Error Types
 *
 * This module defines the error type used by HTTP handlers. Each variant
 * maps to one of the status codes the API surfaces: 401, 404, 409, 422
 * and 500.
 */

use std::collections::BTreeMap;

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Field-level validation errors, keyed by field name.
///
/// Rendered as the 422 response body:
///
/// ```json
/// {
///   "errors": {
///     "title": ["can't be blank"]
///   }
/// }
/// ```
#[derive(Debug, Default, Clone, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field. A field can accumulate several
    /// messages.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finish a validation pass: `Ok(())` when no messages were recorded,
    /// otherwise a 422 `ApiError`.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self))
        }
    }

    pub fn messages_for(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Errors surfaced by HTTP handlers
///
/// Each variant carries enough context to build the HTTP response; the
/// mapping lives in [`ApiError::status_code`] and the `IntoResponse`
/// implementation in `conversion.rs`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload failed validation (422 with field-level messages)
    #[error("unprocessable entity")]
    Validation(FieldErrors),

    /// Missing or invalid credentials (401)
    #[error("unauthorized")]
    Unauthorized,

    /// The requested resource does not exist (404)
    #[error("{resource} not found")]
    NotFound {
        /// Resource kind, e.g. "article" or "profile"
        resource: &'static str,
    },

    /// A uniqueness constraint was violated (409)
    #[error("{message}")]
    Conflict { message: String },

    /// Database failure (500, or 404 for `RowNotFound`)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that should not leak details to the client (500)
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a 422 error with a single field message
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        Self::Validation(errors)
    }

    /// Create a 404 error for a resource kind
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Create a 409 error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a 500 error with an operator-facing message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 422 Unprocessable Entity
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `Database` - 404 for `RowNotFound`, 500 otherwise
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Database and internal errors are collapsed to a generic message so
    /// connection strings and SQL text never reach the client.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(_) => "unprocessable entity".to_string(),
            Self::Unauthorized => "missing or invalid credentials".to_string(),
            Self::NotFound { resource } => format!("{resource} not found"),
            Self::Conflict { message } => message.clone(),
            Self::Database(sqlx::Error::RowNotFound) => "not found".to_string(),
            Self::Database(_) | Self::Internal { .. } => "internal server error".to_string(),
        }
    }
}

/// True when the error is a PostgreSQL unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// True when the error is a PostgreSQL CHECK-constraint violation
pub fn is_check_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_check_violation())
}
