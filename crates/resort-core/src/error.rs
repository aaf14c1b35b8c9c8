//! # Error Types
//!
//! Domain-specific error types for resort-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  resort-core errors (this file)                                        │
//! │  ├── CoreError        - Booking rule violations                        │
//! │  └── ValidationError  - A single form field failing its check          │
//! │                                                                         │
//! │  resort-app errors                                                     │
//! │  └── ApiError         - What the front-end sees (serialized)           │
//! │                                                                         │
//! │  Flow: CoreError → ApiError; ValidationError → FieldErrors → ApiError  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (suite id, dates)
//! 3. Each `ValidationError` renders to the exact text shown under a field

use chrono::{DateTime, Utc};
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Booking rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No suite with this identifier exists in the catalog.
    #[error("Suite not found: {0}")]
    SuiteNotFound(String),

    /// Check-out is not strictly after check-in.
    ///
    /// ## When This Occurs
    /// - Same-day check-in and check-out (zero nights)
    /// - Dates entered in the wrong order
    #[error("Check-out ({check_out}) must be after check-in ({check_in})")]
    InvalidDateRange {
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    },

    /// Check-in falls on or before today; the first bookable day is tomorrow.
    #[error("Check-in ({check_in}) must be after today")]
    CheckInTooEarly { check_in: DateTime<Utc> },

    /// The booking is missing a step required by the requested operation.
    #[error("Booking is incomplete: {missing} not set")]
    BookingIncomplete { missing: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for a single form field.
///
/// `field` is the human label ("Full name", "Email"), not the form key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// The field has a value but it does not have the expected shape.
    #[error("Please enter a valid {field}")]
    Invalid { field: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        ValidationError::Invalid {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
