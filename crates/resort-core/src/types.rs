//! # Domain Types
//!
//! Core domain types used throughout the booking flow.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Suite       │   │ BookingDetails  │   │  BookingUpdate  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  suite?         │◄──│  every field    │       │
//! │  │  name, sleeps   │   │  check_in/out?  │   │  optional       │       │
//! │  │  price_per_night│   │  guest_*        │   │  (shallow merge)│       │
//! │  │  gallery        │   │  nights, total  │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `BookingDetails` holds its own copy of the selected `Suite`, the same way
//! a cart line freezes product data when it is added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::StayQuote;

// =============================================================================
// Suite
// =============================================================================

/// One picture in a suite's gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// A bookable unit from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Suite {
    /// Catalog key, e.g. `suite-1`. Also the `/suite/:id` route parameter.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Maximum number of guests.
    pub sleeps: u32,

    /// Nightly rate in whole currency units. Always positive.
    pub price_per_night: i64,

    pub description: String,

    pub amenities: Vec<String>,

    /// Cover image reference.
    pub image: String,

    /// Ordered gallery; the first entry is shown by default.
    pub gallery: Vec<GalleryImage>,
}

impl Suite {
    /// Returns the nightly rate as Money.
    #[inline]
    pub fn nightly_rate(&self) -> Money {
        Money::from_major(self.price_per_night)
    }
}

// =============================================================================
// Booking Details
// =============================================================================

/// The in-progress reservation for the current session.
///
/// ## Invariants
/// - `nights` and `total_price` only mean something once both dates are set
///   and check-out is strictly after check-in (see [`has_valid_dates`]).
/// - `Default` is the all-empty state a fresh session and `reset` start from.
///
/// [`has_valid_dates`]: BookingDetails::has_valid_dates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub suite: Option<Suite>,

    #[ts(as = "Option<String>")]
    pub check_in: Option<DateTime<Utc>>,

    #[ts(as = "Option<String>")]
    pub check_out: Option<DateTime<Utc>>,

    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,

    pub total_price: Money,
    pub nights: i64,
}

impl BookingDetails {
    /// Both dates are present and check-out is strictly after check-in.
    pub fn has_valid_dates(&self) -> bool {
        matches!((self.check_in, self.check_out), (Some(i), Some(o)) if i < o)
    }

    /// Suite and both dates chosen; the checkout view may render.
    pub fn is_ready_for_checkout(&self) -> bool {
        self.suite.is_some() && self.check_in.is_some() && self.check_out.is_some()
    }

    /// Checkout completed; the confirmation view may render.
    pub fn is_confirmed(&self) -> bool {
        self.is_ready_for_checkout() && !self.guest_name.is_empty()
    }

    /// Shallow-merges `update` into this booking.
    ///
    /// Every field present in the update replaces the current value; absent
    /// fields are left alone. No consistency checks happen here.
    pub fn apply(&mut self, update: BookingUpdate) {
        let BookingUpdate {
            suite,
            check_in,
            check_out,
            guest_name,
            guest_email,
            guest_phone,
            total_price,
            nights,
        } = update;

        if let Some(suite) = suite {
            self.suite = suite;
        }
        if let Some(check_in) = check_in {
            self.check_in = check_in;
        }
        if let Some(check_out) = check_out {
            self.check_out = check_out;
        }
        if let Some(guest_name) = guest_name {
            self.guest_name = guest_name;
        }
        if let Some(guest_email) = guest_email {
            self.guest_email = guest_email;
        }
        if let Some(guest_phone) = guest_phone {
            self.guest_phone = guest_phone;
        }
        if let Some(total_price) = total_price {
            self.total_price = total_price;
        }
        if let Some(nights) = nights {
            self.nights = nights;
        }
    }
}

// =============================================================================
// Booking Update
// =============================================================================

/// A partial `BookingDetails`.
///
/// Nullable fields use `Option<Option<T>>`: the outer `None` means "leave
/// untouched", `Some(None)` means "clear".
///
/// ## Example
/// ```rust
/// use resort_core::{BookingDetails, BookingUpdate};
///
/// let mut booking = BookingDetails::default();
/// booking.apply(BookingUpdate::new().guest_name("Ada Lovelace"));
/// assert_eq!(booking.guest_name, "Ada Lovelace");
/// assert!(booking.check_in.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingUpdate {
    pub suite: Option<Option<Suite>>,
    pub check_in: Option<Option<DateTime<Utc>>>,
    pub check_out: Option<Option<DateTime<Utc>>>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub total_price: Option<Money>,
    pub nights: Option<i64>,
}

impl BookingUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suite(mut self, suite: Suite) -> Self {
        self.suite = Some(Some(suite));
        self
    }

    pub fn clear_suite(mut self) -> Self {
        self.suite = Some(None);
        self
    }

    pub fn check_in(mut self, at: DateTime<Utc>) -> Self {
        self.check_in = Some(Some(at));
        self
    }

    pub fn check_out(mut self, at: DateTime<Utc>) -> Self {
        self.check_out = Some(Some(at));
        self
    }

    /// Clears both dates along with the derived quote fields.
    pub fn clear_dates(mut self) -> Self {
        self.check_in = Some(None);
        self.check_out = Some(None);
        self.nights = Some(0);
        self.total_price = Some(Money::zero());
        self
    }

    pub fn guest_name(mut self, name: impl Into<String>) -> Self {
        self.guest_name = Some(name.into());
        self
    }

    pub fn guest_email(mut self, email: impl Into<String>) -> Self {
        self.guest_email = Some(email.into());
        self
    }

    pub fn guest_phone(mut self, phone: impl Into<String>) -> Self {
        self.guest_phone = Some(phone.into());
        self
    }

    pub fn total_price(mut self, total: Money) -> Self {
        self.total_price = Some(total);
        self
    }

    pub fn nights(mut self, nights: i64) -> Self {
        self.nights = Some(nights);
        self
    }

    /// Sets `nights` and `total_price` from a computed quote.
    pub fn quote(self, quote: StayQuote) -> Self {
        self.nights(quote.nights).total_price(quote.total)
    }

    /// True when applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the guest intends to pay. No payment is actually processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card details are collected and shape-checked.
    #[default]
    Card,
    /// Redirect-style wallet; no card fields are required.
    #[serde(rename = "paypal")]
    PayPal,
}

// =============================================================================
// Confirmation Number
// =============================================================================

/// Builds the mock confirmation number shown after checkout.
///
/// `RES` followed by the last six digits of the millisecond timestamp.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use resort_core::confirmation_number;
///
/// let at = Utc.timestamp_millis_opt(1_748_736_000_123).unwrap();
/// assert_eq!(confirmation_number(at), "RES000123");
/// ```
pub fn confirmation_number(at: DateTime<Utc>) -> String {
    format!("RES{:06}", at.timestamp_millis().rem_euclid(1_000_000))
}

// =============================================================================
// Unit Tests
// =============================================================================
