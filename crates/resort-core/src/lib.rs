//! # resort-core: Pure Booking Logic for Mountain Vista Resort
//!
//! This crate holds every rule of the booking flow as plain functions and
//! types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Resort Booking Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Front-end (views)                        │   │
//! │  │   Catalog ──► Suite Detail ──► Checkout ──► Confirmation        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    resort-app                                   │   │
//! │  │    BookingState, commands, routes, view models                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ resort-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │  pricing  │  │ validation│  │   │
//! │  │   │   Suite   │  │  6 suites │  │  nights   │  │ checkout  │  │   │
//! │  │   │  Booking  │  │           │  │  totals   │  │   form    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Suite, BookingDetails, BookingUpdate, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - The static suite catalog
//! - [`pricing`] - Nights and stay totals
//! - [`validation`] - Checkout form and date-range rules
//! - [`input`] - Input masks for card number and expiry fields
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use resort_core::{catalog, pricing};
//!
//! let suite = catalog::find("suite-1").unwrap();
//! let check_in = pricing::start_of_day(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
//! let check_out = pricing::start_of_day(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
//!
//! let quote = pricing::calculate_total(suite, check_in, check_out).unwrap();
//! assert_eq!(quote.nights, 3);
//! assert_eq!(quote.total.dollars(), 1275);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod input;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::StayQuote;
pub use types::*;
pub use validation::{CheckoutForm, FieldErrors};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Milliseconds in one day; the unit `nights` are counted in.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Minimum digits in a card number once whitespace is stripped.
pub const MIN_CARD_DIGITS: usize = 13;

/// Minimum digits in a card security code.
pub const MIN_CVC_DIGITS: usize = 3;

/// Local time guests may check in from.
pub const CHECK_IN_TIME: &str = "3:00 PM";

/// Local time guests must check out by.
pub const CHECK_OUT_TIME: &str = "11:00 AM";
