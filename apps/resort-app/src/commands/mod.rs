//! # Commands Module
//!
//! Operations the front-end invokes on the session.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Architecture                                 │
//! │                                                                         │
//! │  Session::handle(SessionCommand)                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function (this module)                                  │  │
//! │  │  1. Read what it needs from BookingState / AppConfig             │  │
//! │  │  2. Call resort-core for pricing and validation                  │  │
//! │  │  3. Merge the result into BookingState                           │  │
//! │  │  4. Return Result<T, ApiError>                                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs config
//! fn list_suites(config: &AppConfig) -> Vec<SuiteSummary>
//!
//! // Only needs the booking and the suite page it is called from
//! fn reserve(state: &BookingState, suite_id: &str) -> Result<Route, ApiError>
//! ```

pub mod booking;
pub mod catalog;
pub mod checkout;
pub mod confirmation;
