//! # Checkout Commands
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Complete Your Reservation                                              │
//! │                                                                         │
//! │  Guest Information          Payment Information                         │
//! │  ─────────────────          ───────────────────                         │
//! │  Full Name                  Card Number   1234 5678 9012 3456           │
//! │  Email Address              Expiry (MM/YY)     CVC                      │
//! │  Phone Number                                                           │
//! │                                                                         │
//! │  submit_checkout(form)                                                  │
//! │      ├── errors? ──► ApiError { fieldErrors } (nothing stored)          │
//! │      └── ok ───────► guest fields merged ──► /confirmation              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Card details are validated for shape only and never stored.

use resort_core::{BookingUpdate, CheckoutForm, CoreError};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::routes::Route;
use crate::state::BookingState;

/// Validates the form and stores the guest's contact details.
pub fn submit_checkout(state: &BookingState, form: &CheckoutForm) -> Result<Route, ApiError> {
    debug!(payment = ?form.payment_method, "submit_checkout command");

    if !state.with_booking(|b| b.is_ready_for_checkout()) {
        return Err(CoreError::BookingIncomplete {
            missing: "suite or stay dates",
        }
        .into());
    }

    let errors = form.validate();
    if !errors.is_empty() {
        warn!(fields = ?errors.fields().collect::<Vec<_>>(), "Checkout form rejected");
        return Err(ApiError::form(errors));
    }

    state.update(
        BookingUpdate::new()
            .guest_name(form.guest_name.clone())
            .guest_email(form.guest_email.clone())
            .guest_phone(form.guest_phone.clone()),
    );

    info!("Checkout accepted");
    Ok(Route::Confirmation)
}
