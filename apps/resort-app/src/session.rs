//! # Booking Session
//!
//! One guest's walk through the booking flow: the current route, the booking
//! store, and the commands that move between them.
//!
//! ## Command Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin (one JSON object per line)       stdout (one per line)           │
//! │  ─────────────────────────────────      ─────────────────────           │
//! │                                                                         │
//! │  {"command":"navigate","path":"/suite/suite-1"}                         │
//! │        ──► {"status":"ok","route":{..},"view":{"view":"suite_detail"}}  │
//! │                                                                         │
//! │  {"command":"select_dates","checkIn":"2025-06-01",                      │
//! │   "checkOut":"2025-06-04"}                                              │
//! │        ──► suite detail view with "3 nights", "$1275"                   │
//! │                                                                         │
//! │  {"command":"reserve"}           ──► checkout view                      │
//! │  {"command":"checkout","form":{..}}                                     │
//! │        ──► (confirmation delay) ──► confirmation view                   │
//! │  {"command":"new_booking"}       ──► catalog view, booking cleared      │
//! │                                                                         │
//! │  Failures keep the current route:                                       │
//! │        ──► {"status":"error","route":{..},"error":{"code":..}}          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use resort_core::{catalog, CheckoutForm};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};
use uuid::Uuid;

use crate::commands::{booking, checkout, confirmation};
use crate::error::ApiError;
use crate::routes::Route;
use crate::state::{AppConfig, BookingState};
use crate::views::{self, View};

/// Source of "now" for date checks and confirmation numbers.
pub type Clock = fn() -> DateTime<Utc>;

// =============================================================================
// Wire Types
// =============================================================================

/// A command read from the front-end.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SessionCommand {
    /// Follow a link or type a URL.
    Navigate { path: String },

    /// Pick stay dates on the current suite's page.
    #[serde(rename_all = "camelCase")]
    SelectDates { check_in: String, check_out: String },

    /// "Reserve Now".
    Reserve,

    /// "Complete Reservation".
    Checkout { form: CheckoutForm },

    /// "Book Another Stay".
    NewBooking,

    /// Re-render without changing anything.
    CurrentView,
}

/// What the session answers with.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionResponse {
    Ok { route: Route, view: View },
    Error { route: Route, error: ApiError },
}

impl SessionResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, SessionResponse::Ok { .. })
    }
}

// =============================================================================
// Session
// =============================================================================

pub struct Session {
    id: Uuid,
    state: BookingState,
    config: AppConfig,
    route: Route,
    confirmed_at: Option<DateTime<Utc>>,
    clock: Clock,
}

impl Session {
    /// Starts on the catalog with an empty booking.
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, Utc::now)
    }

    pub fn with_clock(config: AppConfig, clock: Clock) -> Self {
        let id = Uuid::new_v4();
        let state = BookingState::new();

        state.subscribe(move |booking| {
            trace!(
                session = %id,
                suite = booking.suite.as_ref().map(|s| s.id.as_str()),
                confirmed = booking.is_confirmed(),
                "Booking changed"
            );
        });

        Session {
            id,
            state,
            config,
            route: Route::Catalog,
            confirmed_at: None,
            clock,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    /// Renders the current route.
    pub fn view(&self) -> View {
        let now = self.confirmed_at.unwrap_or_else(self.clock);
        views::render(&self.route, &self.state, &self.config, now)
    }

    /// Applies one command and renders the resulting route.
    pub async fn handle(&mut self, command: SessionCommand) -> SessionResponse {
        debug!(session = %self.id, ?command, "Handling command");

        match self.apply(command).await {
            Ok(()) => SessionResponse::Ok {
                route: self.route.clone(),
                view: self.view(),
            },
            Err(error) => {
                warn!(session = %self.id, code = ?error.code, %error, "Command failed");
                SessionResponse::Error {
                    route: self.route.clone(),
                    error,
                }
            }
        }
    }

    async fn apply(&mut self, command: SessionCommand) -> Result<(), ApiError> {
        match command {
            SessionCommand::Navigate { path } => {
                self.route = Route::parse(&path);
                info!(session = %self.id, route = %self.route, "Navigated");

                if let Route::SuiteDetail(suite_id) = &self.route {
                    if catalog::find(suite_id).is_some() {
                        booking::view_suite(&self.state, suite_id)?;
                    }
                }
            }
            SessionCommand::SelectDates {
                check_in,
                check_out,
            } => {
                let Route::SuiteDetail(suite_id) = &self.route else {
                    return Err(ApiError::bad_request(
                        "Dates can only be picked on a suite page",
                    ));
                };
                let check_in = booking::parse_stay_date(&check_in)?;
                let check_out = booking::parse_stay_date(&check_out)?;
                let today = (self.clock)().date_naive();
                booking::select_dates(&self.state, suite_id, check_in, check_out, today)?;
            }
            SessionCommand::Reserve => {
                let Route::SuiteDetail(suite_id) = &self.route else {
                    return Err(ApiError::bad_request(
                        "Reserve is only available on a suite page",
                    ));
                };
                self.route = booking::reserve(&self.state, suite_id)?;
            }
            SessionCommand::Checkout { form } => {
                let next = checkout::submit_checkout(&self.state, &form)?;

                let delay = self.config.confirmation_delay();
                if !delay.is_zero() {
                    debug!(?delay, "Processing reservation");
                    tokio::time::sleep(delay).await;
                }

                self.confirmed_at = Some((self.clock)());
                self.route = next;
            }
            SessionCommand::NewBooking => {
                self.route = confirmation::start_new_booking(&self.state);
                self.confirmed_at = None;
            }
            SessionCommand::CurrentView => {}
        }
        Ok(())
    }
}
