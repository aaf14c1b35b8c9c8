//! # Money Module
//!
//! Provides the `Money` type for stay prices and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Suite rates are whole dollars ($425/night), but a total can be shown  │
//! │  next to deposits or fees later, so we keep the smallest unit (cents)  │
//! │  and never touch floating point.                                       │
//! │                                                                         │
//! │    Money::from_major(425) × 3 nights = 127_500 cents = $1275.00         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use resort_core::money::Money;
//!
//! let rate = Money::from_major(425);
//! let total = rate.times(3);
//! assert_eq!(total.dollars(), 1275);
//! assert_eq!(total.to_string(), "$1275.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// Signed so that a raw quote over an inverted date range stays representable
/// instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units (dollars).
    ///
    /// ## Example
    /// ```rust
    /// use resort_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(350).cents(), 35_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a nightly rate by a number of nights.
    #[inline]
    pub const fn times(&self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly `$1275.00` rendering. The front-end applies its own locale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let money = Money::from_major(425);
        assert_eq!(money.cents(), 42_500);
        assert_eq!(money.dollars(), 425);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(1275).to_string(), "$1275.00");
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert_eq!((a + b).dollars(), 15);
        assert_eq!((a - b).dollars(), 5);
        assert_eq!((a * 3).dollars(), 30);

        let mut sum = Money::zero();
        sum += a;
        assert_eq!(sum, a);
    }

    #[test]
    fn test_times_negative_count() {
        // Inverted ranges produce negative night counts; the math must not panic.
        let total = Money::from_major(100).times(-2);
        assert_eq!(total.dollars(), -200);
        assert!(!total.is_positive());
    }
}
