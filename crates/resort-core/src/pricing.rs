//! # Pricing Module
//!
//! Turns a suite and a pair of stay instants into a night count and a total.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  nights = ceil((check_out - check_in) / 86_400_000 ms)                  │
//! │  total  = nights × suite.price_per_night                                │
//! │                                                                         │
//! │  Ocean Breeze Suite ($425) · Jun 1 → Jun 4                              │
//! │      nights = 3, total = $1275                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `calculate_total` refuses ranges where check-out is not after check-in.
//! `count_nights` and `quote_unchecked` keep the raw arithmetic for callers
//! that gate the range themselves.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Suite;
use crate::MILLIS_PER_DAY;

/// Result of pricing a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub nights: i64,
    pub total: Money,
}

/// Midnight UTC at the start of `date`; the instant a picked calendar day maps to.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days between two instants, rounded up.
///
/// Never fails. An inverted or empty range yields zero or a negative count.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use resort_core::pricing::count_nights;
///
/// let check_in = Utc.with_ymd_and_hms(2025, 6, 1, 15, 0, 0).unwrap();
/// let check_out = Utc.with_ymd_and_hms(2025, 6, 3, 11, 0, 0).unwrap();
/// assert_eq!(count_nights(check_in, check_out), 2);
/// ```
pub fn count_nights(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let millis = (check_out - check_in).num_milliseconds();
    let whole = millis / MILLIS_PER_DAY;
    // Integer division truncates toward zero; bump positive remainders up.
    if millis % MILLIS_PER_DAY > 0 {
        whole + 1
    } else {
        whole
    }
}

/// Prices a stay without checking the range.
pub fn quote_unchecked(
    suite: &Suite,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> StayQuote {
    let nights = count_nights(check_in, check_out);
    StayQuote {
        nights,
        total: suite.nightly_rate().times(nights),
    }
}

/// Prices a stay, rejecting ranges where check-out is not after check-in.
///
/// ## Errors
/// `CoreError::InvalidDateRange` when `check_out <= check_in`.
pub fn calculate_total(
    suite: &Suite,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> CoreResult<StayQuote> {
    if check_out <= check_in {
        return Err(CoreError::InvalidDateRange {
            check_in,
            check_out,
        });
    }

    Ok(quote_unchecked(suite, check_in, check_out))
}

/// The "Reserve Now" gate: both dates chosen and in the right order.
pub fn can_proceed(check_in: Option<DateTime<Utc>>, check_out: Option<DateTime<Utc>>) -> bool {
    matches!((check_in, check_out), (Some(i), Some(o)) if i < o)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use chrono::{Duration, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        start_of_day(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_ocean_breeze_three_nights() {
        let suite = catalog::find("suite-1").unwrap();
        assert_eq!(suite.price_per_night, 425);

        let quote = calculate_total(suite, date(2025, 6, 1), date(2025, 6, 4)).unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total, Money::from_major(1275));
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let check_in = date(2025, 6, 1);
        let check_out = check_in + Duration::days(2) + Duration::milliseconds(1);
        assert_eq!(count_nights(check_in, check_out), 3);

        let check_out = check_in + Duration::hours(23);
        assert_eq!(count_nights(check_in, check_out), 1);
    }

    #[test]
    fn test_nights_match_ceiling_formula() {
        let suite = catalog::find("suite-2").unwrap();
        let check_in = Utc.with_ymd_and_hms(2025, 1, 1, 15, 0, 0).unwrap();

        for hours in [1_i64, 24, 25, 47, 48, 49, 24 * 30 + 5] {
            let check_out = check_in + Duration::hours(hours);
            let millis = hours * 3_600_000;
            let expected = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;

            let quote = calculate_total(suite, check_in, check_out).unwrap();
            assert_eq!(quote.nights, expected, "hours = {hours}");
            assert_eq!(quote.total, Money::from_major(expected * 350));
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        let suite = catalog::find("suite-3").unwrap();
        let result = calculate_total(suite, date(2025, 6, 4), date(2025, 6, 1));
        assert!(matches!(result, Err(CoreError::InvalidDateRange { .. })));

        let same_day = calculate_total(suite, date(2025, 6, 4), date(2025, 6, 4));
        assert!(same_day.is_err());
    }

    #[test]
    fn test_unchecked_quote_keeps_raw_arithmetic() {
        let suite = catalog::find("suite-4").unwrap();
        let quote = quote_unchecked(suite, date(2025, 6, 4), date(2025, 6, 1));
        assert_eq!(quote.nights, -3);
        assert_eq!(quote.total, Money::from_major(-975));

        // Less than a day backwards rounds toward zero, like Math.ceil.
        let check_in = date(2025, 6, 4);
        assert_eq!(count_nights(check_in, check_in - Duration::hours(12)), 0);
    }

    #[test]
    fn test_can_proceed() {
        let a = Some(date(2025, 6, 1));
        let b = Some(date(2025, 6, 2));
        assert!(can_proceed(a, b));
        assert!(!can_proceed(b, a));
        assert!(!can_proceed(a, a));
        assert!(!can_proceed(None, b));
        assert!(!can_proceed(a, None));
    }
}
