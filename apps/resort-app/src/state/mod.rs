//! # State Module
//!
//! Application state for a booking session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────────┬──────────────────┐                │
//! │          ▼                          ▼                  │                │
//! │  ┌──────────────────┐     ┌──────────────────┐        │                │
//! │  │  BookingState    │     │   AppConfig      │        │                │
//! │  │                  │     │                  │        │                │
//! │  │  Arc<Mutex<      │     │  resort_name     │        │                │
//! │  │   BookingDetails │     │  tagline         │        │                │
//! │  │  >> + observers  │     │  delay           │        │                │
//! │  └──────────────────┘     └──────────────────┘        │                │
//! │                                                                         │
//! │  BookingState: one per session, passed by reference to commands/views │
//! │  AppConfig: read-only after startup                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod booking;
mod config;

pub use booking::{BookingState, Observer};
pub use config::{AppConfig, ConfigError};
