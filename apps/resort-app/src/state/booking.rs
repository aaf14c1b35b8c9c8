//! # Booking State
//!
//! Holds the one in-progress reservation for the session.
//!
//! ## Booking Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking State Operations                             │
//! │                                                                         │
//! │  User Action              Command                 State Change          │
//! │  ───────────              ───────                 ────────────          │
//! │                                                                         │
//! │  Pick dates ─────────────► select_dates() ──────► suite, dates, quote   │
//! │                                                                         │
//! │  Submit checkout ────────► submit_checkout() ───► guest fields          │
//! │                                                                         │
//! │  Book another stay ──────► start_new_booking() ─► reset to default      │
//! │                                                                         │
//! │  Any view ───────────────► get() ───────────────► (read only)           │
//! │                                                                         │
//! │  After every update/reset, subscribers receive the new snapshot.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use resort_core::{BookingDetails, BookingUpdate};
use tracing::debug;

/// Callback invoked with the booking after each change.
pub type Observer = Arc<dyn Fn(&BookingDetails) + Send + Sync>;

/// The session's booking store.
///
/// `update` performs no validation; callers keep suite, dates and quote
/// consistent. Operations never fail.
///
/// Clones are handles to the same booking and subscriber list.
#[derive(Clone)]
pub struct BookingState {
    booking: Arc<Mutex<BookingDetails>>,
    observers: Arc<Mutex<Vec<Observer>>>,
}

impl BookingState {
    /// Creates a store holding the empty default booking.
    pub fn new() -> Self {
        BookingState {
            booking: Arc::new(Mutex::new(BookingDetails::default())),
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a snapshot of the current booking.
    pub fn get(&self) -> BookingDetails {
        self.lock_booking().clone()
    }

    /// Executes a function with read access to the booking.
    ///
    /// ## Usage
    /// ```rust
    /// # use resort_app::state::BookingState;
    /// let state = BookingState::new();
    /// let nights = state.with_booking(|b| b.nights);
    /// assert_eq!(nights, 0);
    /// ```
    pub fn with_booking<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BookingDetails) -> R,
    {
        let booking = self.lock_booking();
        f(&booking)
    }

    /// Shallow-merges `update` into the booking and notifies subscribers.
    pub fn update(&self, update: BookingUpdate) {
        let snapshot = {
            let mut booking = self.lock_booking();
            booking.apply(update);
            booking.clone()
        };

        debug!(
            suite = snapshot.suite.as_ref().map(|s| s.id.as_str()),
            nights = snapshot.nights,
            total = %snapshot.total_price,
            "Booking updated"
        );
        self.notify(&snapshot);
    }

    /// Restores the empty default booking and notifies subscribers.
    pub fn reset(&self) {
        let snapshot = {
            let mut booking = self.lock_booking();
            *booking = BookingDetails::default();
            booking.clone()
        };

        debug!("Booking reset");
        self.notify(&snapshot);
    }

    /// Registers a callback run after every `update` and `reset`.
    ///
    /// Callbacks run with no lock held, so they may read, update or reset the
    /// store and subscribe further observers. An observer that writes back
    /// must stop once the booking reaches the state it wants, or it recurses.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&BookingDetails) + Send + Sync + 'static,
    {
        self.lock_observers().push(Arc::new(observer));
    }

    fn notify(&self, snapshot: &BookingDetails) {
        let observers: Vec<Observer> = self.lock_observers().clone();
        for observer in observers {
            observer(snapshot);
        }
    }

    fn lock_booking(&self) -> MutexGuard<'_, BookingDetails> {
        // A panicking observer cannot leave the booking half-written; keep serving it.
        self.booking.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_observers(&self) -> MutexGuard<'_, Vec<Observer>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingState")
            .field("booking", &*self.lock_booking())
            .field("observers", &self.lock_observers().len())
            .finish()
    }
}
