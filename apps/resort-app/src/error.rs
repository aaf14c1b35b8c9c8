//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Booking Session                    │
//! │                                                                         │
//! │  Command Function: Result<T, ApiError>                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Unknown suite? ──── CoreError::SuiteNotFound ───────┐                  │
//! │         │                                            │                  │
//! │         ▼                                            ▼                  │
//! │  Bad dates? ──────── CoreError::InvalidDateRange ── ApiError ──► JSON   │
//! │         │                                            ▲                  │
//! │         ▼                                            │                  │
//! │  Form errors? ────── FieldErrors ────────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "Please correct the highlighted fields",
//!   "fieldErrors": { "guestEmail": "Please enter a valid email address" }
//! }
//! ```

use resort_core::{CoreError, FieldErrors};
use serde::Serialize;
use thiserror::Error;

use crate::state::ConfigError;

/// Failures that end the session driver.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned from commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages when a form was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown suite or route target
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// Stay dates are unusable
    InvalidDates,

    /// A prior booking step has not been completed
    BookingIncomplete,

    /// Malformed command
    BadRequest,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// A rejected checkout form.
    pub fn form(field_errors: FieldErrors) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: "Please correct the highlighted fields".to_string(),
            field_errors: Some(field_errors),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SuiteNotFound(id) => ApiError::not_found("Suite", &id),
            err @ (CoreError::InvalidDateRange { .. } | CoreError::CheckInTooEarly { .. }) => {
                ApiError::new(ErrorCode::InvalidDates, err.to_string())
            }
            err @ CoreError::BookingIncomplete { .. } => {
                ApiError::new(ErrorCode::BookingIncomplete, err.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use resort_core::CheckoutForm;

    #[test]
    fn test_suite_not_found_maps_to_not_found() {
        let err: ApiError = CoreError::SuiteNotFound("suite-9".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Suite not found: suite-9");
    }

    #[test]
    fn test_date_errors_map_to_invalid_dates() {
        let day = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        let err: ApiError = CoreError::CheckInTooEarly { check_in: day }.into();
        assert_eq!(err.code, ErrorCode::InvalidDates);

        let err: ApiError = CoreError::InvalidDateRange {
            check_in: day,
            check_out: day,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidDates);
    }

    #[test]
    fn test_serialized_shape() {
        let errors = CheckoutForm::default().validate();
        let json = serde_json::to_value(ApiError::form(errors)).unwrap();

        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["fieldErrors"]["cvc"], "CVC is required");

        let json = serde_json::to_value(ApiError::bad_request("nope")).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("fieldErrors").is_none());
    }
}
