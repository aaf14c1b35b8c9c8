//! # View Models
//!
//! What each route renders, as plain serializable data.
//!
//! ## Fallbacks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Route            Needs                          Otherwise              │
//! │  ─────            ─────                          ─────────              │
//! │  /suite/:id       a catalog suite with that id   "Suite not found"      │
//! │  /checkout        suite + check-in + check-out   "No booking            │
//! │                                                   information found"    │
//! │  /confirmation    suite + dates + guest name     "No booking            │
//! │                                                   confirmation found"   │
//! │                                                                         │
//! │  Every fallback links back to the catalog. Rendering never fails.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use resort_core::{pricing, BookingDetails, StayQuote, Suite};
use serde::Serialize;

use crate::commands::catalog::{list_suites, SuiteSummary};
use crate::commands::confirmation::get_confirmation;
use crate::routes::Route;
use crate::state::{AppConfig, BookingState};

pub const SUITE_NOT_FOUND: &str = "Suite not found";
pub const NO_BOOKING_FOUND: &str = "No booking information found";
pub const NO_CONFIRMATION_FOUND: &str = "No booking confirmation found";

/// A rendered route.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Catalog(CatalogView),
    SuiteDetail(SuiteDetailView),
    Checkout(CheckoutView),
    Confirmation(ConfirmationView),
    Fallback(FallbackView),
    Auth(PlaceholderView),
    NotFound(PlaceholderView),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub resort_name: String,
    pub tagline: String,
    pub suites: Vec<SuiteSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteDetailView {
    pub suite: Suite,
    pub price_label: String,
    /// `Jun 01, 2025`, or absent until picked.
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub quote: Option<StayQuote>,
    pub total_label: Option<String>,
    /// Whether "Reserve Now" is enabled.
    pub can_proceed: bool,
    pub back_link: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    pub suite_id: String,
    pub suite_name: String,
    pub suite_image: String,
    pub sleeps: u32,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub price_label: String,
    pub total_label: String,
    /// Prefilled from the booking.
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub back_link: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationView {
    pub confirmation_number: String,
    pub suite_name: String,
    pub suite_image: String,
    pub sleeps: u32,
    /// `Sunday, June 1, 2025`
    pub check_in: String,
    pub check_in_time: String,
    pub check_out: String,
    pub check_out_time: String,
    pub nights: i64,
    pub total_label: String,
    pub guest_name: String,
    /// First letter of the guest's name, upper-cased, for the avatar.
    pub guest_initial: String,
    pub guest_email: String,
    pub guest_phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackView {
    pub message: String,
    pub link_label: String,
    pub link: String,
}

impl FallbackView {
    pub fn new(message: &str) -> Self {
        FallbackView {
            message: message.to_string(),
            link_label: "Return to Suites".to_string(),
            link: Route::Catalog.path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderView {
    pub message: String,
    pub path: String,
}

pub(crate) fn short_date(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y").to_string()
}

pub(crate) fn long_date(at: DateTime<Utc>) -> String {
    at.format("%A, %B %-d, %Y").to_string()
}

/// Renders `route` against the current booking.
///
/// `now` stamps the confirmation number.
pub fn render(route: &Route, state: &BookingState, config: &AppConfig, now: DateTime<Utc>) -> View {
    match route {
        Route::Catalog => View::Catalog(CatalogView {
            resort_name: config.resort_name.clone(),
            tagline: config.tagline.clone(),
            suites: list_suites(config),
        }),
        Route::SuiteDetail(id) => match resort_core::catalog::find(id) {
            Some(suite) => View::SuiteDetail(suite_detail(suite, &state.get(), config)),
            None => View::Fallback(FallbackView::new(SUITE_NOT_FOUND)),
        },
        Route::Checkout => match checkout(&state.get(), config) {
            Some(view) => View::Checkout(view),
            None => View::Fallback(FallbackView::new(NO_BOOKING_FOUND)),
        },
        Route::Confirmation => match get_confirmation(state, config, now) {
            Ok(view) => View::Confirmation(view),
            Err(_) => View::Fallback(FallbackView::new(NO_CONFIRMATION_FOUND)),
        },
        Route::Auth => View::Auth(PlaceholderView {
            message: "Sign-in is not available yet".to_string(),
            path: route.path(),
        }),
        Route::NotFound(path) => View::NotFound(PlaceholderView {
            message: "Page not found".to_string(),
            path: path.clone(),
        }),
    }
}

fn suite_detail(suite: &Suite, booking: &BookingDetails, config: &AppConfig) -> SuiteDetailView {
    let can_proceed = pricing::can_proceed(booking.check_in, booking.check_out);
    let quote = match (booking.check_in, booking.check_out) {
        (Some(check_in), Some(check_out)) if can_proceed => {
            pricing::calculate_total(suite, check_in, check_out).ok()
        }
        _ => None,
    };

    SuiteDetailView {
        suite: suite.clone(),
        price_label: config.format_currency(suite.nightly_rate()),
        check_in: booking.check_in.map(short_date),
        check_out: booking.check_out.map(short_date),
        total_label: quote.map(|q| config.format_currency(q.total)),
        quote,
        can_proceed,
        back_link: Route::Catalog.path(),
    }
}

fn checkout(booking: &BookingDetails, config: &AppConfig) -> Option<CheckoutView> {
    let (suite, check_in, check_out) = match (&booking.suite, booking.check_in, booking.check_out) {
        (Some(suite), Some(check_in), Some(check_out)) => (suite, check_in, check_out),
        _ => return None,
    };

    Some(CheckoutView {
        suite_id: suite.id.clone(),
        suite_name: suite.name.clone(),
        suite_image: suite.image.clone(),
        sleeps: suite.sleeps,
        check_in: short_date(check_in),
        check_out: short_date(check_out),
        nights: booking.nights,
        price_label: config.format_currency(suite.nightly_rate()),
        total_label: config.format_currency(booking.total_price),
        guest_name: booking.guest_name.clone(),
        guest_email: booking.guest_email.clone(),
        guest_phone: booking.guest_phone.clone(),
        back_link: Route::SuiteDetail(suite.id.clone()).path(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::booking::{parse_stay_date, select_dates};
    use chrono::{NaiveDate, TimeZone};
    use resort_core::BookingUpdate;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, 9, 30, 0).unwrap()
    }

    fn booked_state() -> BookingState {
        let state = BookingState::new();
        select_dates(
            &state,
            "suite-1",
            parse_stay_date("2025-06-01").unwrap(),
            parse_stay_date("2025-06-04").unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
        )
        .unwrap();
        state
    }

    #[test]
    fn test_checkout_without_booking_renders_fallback() {
        let view = render(&Route::Checkout, &BookingState::new(), &AppConfig::default(), now());
        match view {
            View::Fallback(fallback) => {
                assert_eq!(fallback.message, NO_BOOKING_FOUND);
                assert_eq!(fallback.link, "/");
                assert_eq!(fallback.link_label, "Return to Suites");
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_suite_renders_fallback() {
        let view = render(
            &Route::SuiteDetail("suite-42".into()),
            &BookingState::new(),
            &AppConfig::default(),
            now(),
        );
        assert!(matches!(view, View::Fallback(f) if f.message == SUITE_NOT_FOUND));
    }

    #[test]
    fn test_confirmation_needs_guest_name() {
        let state = booked_state();
        let view = render(&Route::Confirmation, &state, &AppConfig::default(), now());
        assert!(matches!(view, View::Fallback(f) if f.message == NO_CONFIRMATION_FOUND));
    }

    #[test]
    fn test_suite_detail_shows_quote() {
        let state = booked_state();
        let view = render(
            &Route::SuiteDetail("suite-1".into()),
            &state,
            &AppConfig::default(),
            now(),
        );
        let View::SuiteDetail(detail) = view else {
            panic!("expected suite detail");
        };

        assert!(detail.can_proceed);
        assert_eq!(detail.check_in.as_deref(), Some("Jun 01, 2025"));
        assert_eq!(detail.quote.map(|q| q.nights), Some(3));
        assert_eq!(detail.total_label.as_deref(), Some("$1275"));
    }

    #[test]
    fn test_suite_detail_prices_the_viewed_suite() {
        // Dates chosen on suite-1 carry over when browsing another suite.
        let state = booked_state();
        let view = render(
            &Route::SuiteDetail("suite-2".into()),
            &state,
            &AppConfig::default(),
            now(),
        );
        let View::SuiteDetail(detail) = view else {
            panic!("expected suite detail");
        };
        assert_eq!(detail.total_label.as_deref(), Some("$1050"));
    }

    #[test]
    fn test_suite_detail_with_inverted_dates_has_no_quote() {
        let state = BookingState::new();
        state.update(
            BookingUpdate::new()
                .check_in(parse_stay_date("2025-06-04").unwrap())
                .check_out(parse_stay_date("2025-06-01").unwrap()),
        );
        let view = render(
            &Route::SuiteDetail("suite-1".into()),
            &state,
            &AppConfig::default(),
            now(),
        );
        let View::SuiteDetail(detail) = view else {
            panic!("expected suite detail");
        };
        assert!(!detail.can_proceed);
        assert!(detail.quote.is_none());
    }

    #[test]
    fn test_checkout_view_summarises_booking() {
        let view = render(&Route::Checkout, &booked_state(), &AppConfig::default(), now());
        let View::Checkout(checkout) = view else {
            panic!("expected checkout");
        };
        assert_eq!(checkout.suite_name, "Ocean Breeze Suite");
        assert_eq!(checkout.nights, 3);
        assert_eq!(checkout.total_label, "$1275");
        assert_eq!(checkout.back_link, "/suite/suite-1");
    }

    #[test]
    fn test_view_serializes_with_tag() {
        let view = render(&Route::Catalog, &BookingState::new(), &AppConfig::default(), now());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"], "catalog");
        assert_eq!(json["resortName"], "Mountain Vista Resort");
        assert_eq!(json["suites"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn test_auth_and_not_found() {
        let state = BookingState::new();
        let config = AppConfig::default();
        assert!(matches!(render(&Route::Auth, &state, &config, now()), View::Auth(_)));
        assert!(matches!(
            render(&Route::parse("/spa"), &state, &config, now()),
            View::NotFound(p) if p.path == "/spa"
        ));
    }
}
