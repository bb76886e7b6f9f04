//! Error types and error handling for the application
//!
//! This module defines the application error enum and its conversion to
//! HTTP responses. The display strings double as the wire-level error
//! messages, so they must stay stable.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Validation errors are raised before any state mutation, so a failed
/// request never leaves a partial change behind. Persistence failures
/// are deliberately absent here: snapshot writes are best-effort and
/// logged, never surfaced to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// No film with the requested id exists
    #[error("Film not found")]
    FilmNotFound,

    /// A required field was absent (or an empty string) in the input
    #[error("Missing required fields")]
    MissingFields,

    /// The release year predates the earliest film on record
    #[error("Invalid year")]
    InvalidYear,

    /// Budget or gross was negative
    #[error("Budget and gross cannot be negative")]
    NegativeValue,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::FilmNotFound => StatusCode::NOT_FOUND,
            AppError::MissingFields | AppError::InvalidYear | AppError::NegativeValue => {
                StatusCode::BAD_REQUEST
            }
        };

        let body = Json(json!({
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(AppError::FilmNotFound.to_string(), "Film not found");
        assert_eq!(AppError::MissingFields.to_string(), "Missing required fields");
        assert_eq!(AppError::InvalidYear.to_string(), "Invalid year");
        assert_eq!(
            AppError::NegativeValue.to_string(),
            "Budget and gross cannot be negative"
        );
    }

    #[test]
    fn test_status_code_mapping() {
        let response = AppError::FilmNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::MissingFields.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
