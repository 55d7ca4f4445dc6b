use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sriweb_core::error::CoreError;
use sriweb_core::forms::field_errors;
use sriweb_db::RepoError;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sriweb_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A submitted form failed field-level validation.
    #[error("Invalid form: {0}")]
    InvalidForm(#[from] ValidationErrors),

    /// A form body that could not be read: bad JSON, a missing field or an
    /// unknown choice.
    #[error("Unreadable form: {0}")]
    UnreadableForm(#[from] JsonRejection),
}

/// Message shown for a required field that was left out of the body.
pub const FIELD_REQUIRED: &str = "This field is required.";

/// Name of the field a serde "missing field" error points at, if any.
fn missing_field(rejection: &JsonRejection) -> Option<String> {
    let text = rejection.body_text();
    let (_, rest) = text.split_once("missing field `")?;
    let (field, _) = rest.split_once('`')?;
    Some(field.to_string())
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Core(core) => Self::Core(core),
            RepoError::Database(db) => Self::Database(db),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::SingletonViolation(_) => {
                    tracing::error!(error = %core, "Singleton violation");
                    (StatusCode::CONFLICT, "SINGLETON_VIOLATION", core.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Form errors ---
            AppError::UnreadableForm(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected form body");
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Please fill in all required fields correctly.".to_string(),
                )
            }
            AppError::InvalidForm(_) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Please correct the highlighted fields".to_string(),
            ),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        // Form errors carry a per-field breakdown next to the usual pair.
        match &self {
            AppError::InvalidForm(errors) => body["fields"] = json!(field_errors(errors)),
            AppError::UnreadableForm(rejection) => {
                if let Some(field) = missing_field(rejection) {
                    body["fields"] = json!(BTreeMap::from([(field, [FIELD_REQUIRED])]));
                }
            }
            _ => {}
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
