//! Confirmation commands: the receipt and starting over.

use chrono::{DateTime, Utc};
use resort_core::{confirmation_number, CoreError, CHECK_IN_TIME, CHECK_OUT_TIME};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::routes::Route;
use crate::state::{AppConfig, BookingState};
use crate::views::{long_date, ConfirmationView};

/// Builds the receipt for a completed checkout.
///
/// `confirmed_at` stamps the confirmation number.
pub fn get_confirmation(
    state: &BookingState,
    config: &AppConfig,
    confirmed_at: DateTime<Utc>,
) -> Result<ConfirmationView, ApiError> {
    debug!("get_confirmation command");

    let booking = state.get();
    let (suite, check_in, check_out) = match (&booking.suite, booking.check_in, booking.check_out) {
        (Some(suite), Some(check_in), Some(check_out)) if !booking.guest_name.is_empty() => {
            (suite, check_in, check_out)
        }
        _ => {
            return Err(CoreError::BookingIncomplete {
                missing: "completed checkout",
            }
            .into())
        }
    };

    let guest_initial = booking
        .guest_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    Ok(ConfirmationView {
        confirmation_number: confirmation_number(confirmed_at),
        suite_name: suite.name.clone(),
        suite_image: suite.image.clone(),
        sleeps: suite.sleeps,
        check_in: long_date(check_in),
        check_in_time: CHECK_IN_TIME.to_string(),
        check_out: long_date(check_out),
        check_out_time: CHECK_OUT_TIME.to_string(),
        nights: booking.nights,
        total_label: config.format_currency(booking.total_price),
        guest_initial,
        guest_name: booking.guest_name.clone(),
        guest_email: booking.guest_email.clone(),
        guest_phone: booking.guest_phone.clone(),
    })
}

/// Clears the booking and returns to the catalog.
pub fn start_new_booking(state: &BookingState) -> Route {
    info!("Starting a new booking");
    state.reset();
    Route::Catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::booking::{parse_stay_date, select_dates};
    use crate::error::ErrorCode;
    use chrono::{NaiveDate, TimeZone};
    use resort_core::{BookingDetails, BookingUpdate};

    fn confirmed_state() -> BookingState {
        let state = BookingState::new();
        select_dates(
            &state,
            "suite-1",
            parse_stay_date("2025-06-01").unwrap(),
            parse_stay_date("2025-06-04").unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
        )
        .unwrap();
        state.update(
            BookingUpdate::new()
                .guest_name("ada Lovelace")
                .guest_email("ada@example.com")
                .guest_phone("555-0100"),
        );
        state
    }

    #[test]
    fn test_confirmation_view() {
        let at = Utc.timestamp_millis_opt(1_748_736_042_517).unwrap();
        let view = get_confirmation(&confirmed_state(), &AppConfig::default(), at).unwrap();

        assert_eq!(view.confirmation_number, "RES042517");
        assert_eq!(view.suite_name, "Ocean Breeze Suite");
        assert_eq!(view.check_in, "Sunday, June 1, 2025");
        assert_eq!(view.check_out, "Wednesday, June 4, 2025");
        assert_eq!(view.check_in_time, "3:00 PM");
        assert_eq!(view.check_out_time, "11:00 AM");
        assert_eq!(view.nights, 3);
        assert_eq!(view.total_label, "$1275");
        assert_eq!(view.guest_initial, "A");
    }

    #[test]
    fn test_confirmation_requires_checkout() {
        let err = get_confirmation(&BookingState::new(), &AppConfig::default(), Utc::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingIncomplete);
    }

    #[test]
    fn test_start_new_booking_resets() {
        let state = confirmed_state();
        assert_eq!(start_new_booking(&state), Route::Catalog);
        assert_eq!(state.get(), BookingDetails::default());
    }
}
