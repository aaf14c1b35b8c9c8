//! # Booking Commands
//!
//! Suite selection and the "Reserve Now" step.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Suite detail page                                                      │
//! │                                                                         │
//! │  Open /suite/:id ──► view_suite() ──► dates already picked? re-price    │
//! │                                       them for this suite               │
//! │                                                                         │
//! │  Pick check-in ─┐                                                       │
//! │  Pick check-out ┴──► select_dates() ──► quote shown ("3 nights $1275")  │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                       Reserve Now ──► reserve() ──► /checkout           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The booking always follows the suite page the guest is on, so checkout
//! bills the suite whose total was last shown.

use chrono::{DateTime, NaiveDate, Utc};
use resort_core::{
    catalog, pricing, validation, BookingDetails, BookingUpdate, CoreError, StayQuote,
};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::routes::Route;
use crate::state::BookingState;

/// Current booking snapshot.
pub fn get_booking(state: &BookingState) -> BookingDetails {
    debug!("get_booking command");
    state.get()
}

/// Parses a stay date given as `YYYY-MM-DD` (start of day, UTC) or RFC 3339.
pub fn parse_stay_date(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(pricing::start_of_day(date));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| ApiError::bad_request(format!("Unrecognized date: {raw}")))
}

/// Records a suite and stay dates, pricing the stay.
///
/// The booking is only touched when the range is usable: check-in not before
/// `today` and check-out after check-in.
pub fn select_dates(
    state: &BookingState,
    suite_id: &str,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    today: NaiveDate,
) -> Result<StayQuote, ApiError> {
    debug!(suite_id, %check_in, %check_out, "select_dates command");

    let suite = catalog::get(suite_id)?;
    validation::validate_stay_dates(check_in, check_out, today)?;
    let quote = pricing::calculate_total(suite, check_in, check_out)?;

    state.update(
        BookingUpdate::new()
            .suite(suite.clone())
            .check_in(check_in)
            .check_out(check_out)
            .quote(quote),
    );

    info!(suite_id, nights = quote.nights, total = %quote.total, "Stay priced");
    Ok(quote)
}

/// Rebinds the booking to `suite_id` when a usable range is already picked.
///
/// Returns the new quote, or `None` when there is nothing to re-price or the
/// booking already holds this suite.
pub fn view_suite(state: &BookingState, suite_id: &str) -> Result<Option<StayQuote>, ApiError> {
    debug!(suite_id, "view_suite command");

    let suite = catalog::get(suite_id)?;
    let pending = state.with_booking(|booking| {
        let bound = booking.suite.as_ref().is_some_and(|s| s.id == suite_id);
        match (booking.check_in, booking.check_out) {
            (Some(check_in), Some(check_out)) if !bound && check_in < check_out => {
                Some((check_in, check_out))
            }
            _ => None,
        }
    });
    let Some((check_in, check_out)) = pending else {
        return Ok(None);
    };

    let quote = pricing::calculate_total(suite, check_in, check_out)?;
    state.update(BookingUpdate::new().suite(suite.clone()).quote(quote));

    info!(suite_id, nights = quote.nights, total = %quote.total, "Stay re-priced");
    Ok(Some(quote))
}

/// Moves on to checkout from the page of `suite_id`.
///
/// The booking must hold a valid range and be bound to that suite.
pub fn reserve(state: &BookingState, suite_id: &str) -> Result<Route, ApiError> {
    debug!(suite_id, "reserve command");

    state.with_booking(|booking| -> Result<Route, ApiError> {
        if !pricing::can_proceed(booking.check_in, booking.check_out) {
            return Err(CoreError::BookingIncomplete {
                missing: "stay dates",
            }
            .into());
        }
        if !booking.suite.as_ref().is_some_and(|s| s.id == suite_id) {
            return Err(CoreError::BookingIncomplete { missing: "suite" }.into());
        }
        Ok(Route::Checkout)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use resort_core::Money;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn date(raw: &str) -> DateTime<Utc> {
        parse_stay_date(raw).unwrap()
    }

    #[test]
    fn test_parse_stay_date() {
        assert_eq!(date("2025-06-01").to_rfc3339(), "2025-06-01T00:00:00+00:00");
        assert_eq!(
            date("2025-06-01T15:00:00+02:00").to_rfc3339(),
            "2025-06-01T13:00:00+00:00"
        );
        assert_eq!(
            parse_stay_date("June 1st").unwrap_err().code,
            ErrorCode::BadRequest
        );
    }

    #[test]
    fn test_select_dates_prices_and_stores() {
        let state = BookingState::new();
        let quote = select_dates(&state, "suite-1", date("2025-06-01"), date("2025-06-04"), today())
            .unwrap();

        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total, Money::from_major(1275));

        let booking = get_booking(&state);
        assert_eq!(booking.suite.map(|s| s.id), Some("suite-1".to_string()));
        assert_eq!(booking.nights, 3);
        assert_eq!(booking.total_price, Money::from_major(1275));
    }

    #[test]
    fn test_select_dates_rejects_bad_ranges_without_touching_state() {
        let state = BookingState::new();

        let err = select_dates(&state, "suite-1", date("2025-06-04"), date("2025-06-01"), today())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDates);

        let err = select_dates(&state, "suite-1", date("2025-04-01"), date("2025-06-01"), today())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDates);

        let err = select_dates(&state, "suite-0", date("2025-06-01"), date("2025-06-04"), today())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        assert_eq!(state.get(), BookingDetails::default());
    }

    #[test]
    fn test_reserve_requires_suite_and_dates() {
        let state = BookingState::new();
        assert_eq!(
            reserve(&state, "suite-2").unwrap_err().code,
            ErrorCode::BookingIncomplete
        );

        select_dates(&state, "suite-2", date("2025-06-01"), date("2025-06-02"), today()).unwrap();
        assert_eq!(reserve(&state, "suite-2").unwrap(), Route::Checkout);
    }

    #[test]
    fn test_reserve_rejects_other_suite() {
        let state = BookingState::new();
        select_dates(&state, "suite-1", date("2025-06-01"), date("2025-06-04"), today()).unwrap();

        let err = reserve(&state, "suite-2").unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingIncomplete);
    }

    #[test]
    fn test_view_suite_rebinds_picked_dates() {
        let state = BookingState::new();
        select_dates(&state, "suite-1", date("2025-06-01"), date("2025-06-04"), today()).unwrap();

        let quote = view_suite(&state, "suite-2").unwrap().unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total, Money::from_major(1050));

        let booking = get_booking(&state);
        assert_eq!(booking.suite.map(|s| s.id), Some("suite-2".to_string()));
        assert_eq!(booking.total_price, Money::from_major(1050));
        assert_eq!(booking.check_in, Some(date("2025-06-01")));

        // Already bound: nothing to do.
        assert!(view_suite(&state, "suite-2").unwrap().is_none());
    }

    #[test]
    fn test_view_suite_without_dates_leaves_booking() {
        let state = BookingState::new();
        assert!(view_suite(&state, "suite-3").unwrap().is_none());
        assert_eq!(state.get(), BookingDetails::default());

        assert_eq!(
            view_suite(&state, "suite-9").unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
