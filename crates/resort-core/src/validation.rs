//! # Validation Module
//!
//! Checkout form and stay-date validation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Submission                                │
//! │                                                                         │
//! │  CheckoutForm ──► validate_checkout() ──► FieldErrors                  │
//! │                        │                      │                         │
//! │                        │               empty? ├── yes ─► merge guest    │
//! │                        │                      │          fields, go to  │
//! │                        │                      │          confirmation   │
//! │                        │                      └── no ──► show message   │
//! │                        │                                 under each     │
//! │                        │                                 failing field  │
//! │  Every field is checked; the map holds one message per failing field.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use resort_core::validation::{validate_checkout, CheckoutForm};
//!
//! let form = CheckoutForm {
//!     guest_name: "Ada Lovelace".into(),
//!     guest_email: "ada@example.com".into(),
//!     guest_phone: "+44 20 7946 0000".into(),
//!     card_number: "4242 4242 4242 4242".into(),
//!     expiry_date: "12/29".into(),
//!     cvc: "123".into(),
//!     ..Default::default()
//! };
//! assert!(validate_checkout(&form).is_empty());
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::pricing::start_of_day;
use crate::types::PaymentMethod;
use crate::{MIN_CARD_DIGITS, MIN_CVC_DIGITS};

/// Result type for single-field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Form Field Keys
// =============================================================================

pub const FIELD_GUEST_NAME: &str = "guestName";
pub const FIELD_GUEST_EMAIL: &str = "guestEmail";
pub const FIELD_GUEST_PHONE: &str = "guestPhone";
pub const FIELD_CARD_NUMBER: &str = "cardNumber";
pub const FIELD_EXPIRY_DATE: &str = "expiryDate";
pub const FIELD_CVC: &str = "cvc";

// =============================================================================
// Checkout Form
// =============================================================================

/// Everything the guest types on the checkout page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub payment_method: PaymentMethod,
    pub card_number: String,
    pub expiry_date: String,
    pub cvc: String,
}

impl CheckoutForm {
    /// Shorthand for [`validate_checkout`].
    pub fn validate(&self) -> FieldErrors {
        validate_checkout(self)
    }
}

/// Failing form fields keyed by field name, each with its display message.
///
/// An empty map means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn record(&mut self, field: &str, result: ValidationResult<()>) {
        if let Err(err) = result {
            self.0.insert(field.to_string(), err.to_string());
        }
    }
}

// =============================================================================
// Field Validators
// =============================================================================

fn email_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

fn expiry_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}/\d{2}$").expect("expiry pattern compiles"))
}

fn require(value: &str, label: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(label));
    }
    Ok(())
}

/// Full name must not be blank.
pub fn validate_guest_name(name: &str) -> ValidationResult<()> {
    require(name, "Full name")
}

/// Email must be present and look like `something@something.something`.
///
/// ## Example
/// ```rust
/// use resort_core::validation::validate_email;
///
/// assert!(validate_email("a@b.com").is_ok());
/// assert!(validate_email("abc").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    require(email, "Email")?;

    if !email_shape().is_match(email) {
        return Err(ValidationError::invalid("email address"));
    }

    Ok(())
}

/// Phone number must not be blank. No format is imposed.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    require(phone, "Phone number")
}

/// Card number: digits only, at least 13 of them once whitespace is removed.
///
/// ## Example
/// ```rust
/// use resort_core::validation::validate_card_number;
///
/// assert!(validate_card_number("4242 4242 4242 4242").is_ok());
/// assert!(validate_card_number("123").is_err());
/// ```
pub fn validate_card_number(card_number: &str) -> ValidationResult<()> {
    require(card_number, "Card number")?;

    let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() < MIN_CARD_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid("card number"));
    }

    Ok(())
}

/// Expiry must be exactly `MM/YY`.
///
/// Only the shape is checked; `13/99` passes.
pub fn validate_expiry(expiry: &str) -> ValidationResult<()> {
    require(expiry, "Expiry date")?;

    if !expiry_shape().is_match(expiry) {
        return Err(ValidationError::invalid("expiry date (MM/YY)"));
    }

    Ok(())
}

/// CVC: at least three digits, nothing else.
pub fn validate_cvc(cvc: &str) -> ValidationResult<()> {
    require(cvc, "CVC")?;

    let cvc = cvc.trim();
    if cvc.len() < MIN_CVC_DIGITS || !cvc.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid("CVC"));
    }

    Ok(())
}

/// Checks every field of the checkout form.
///
/// Card fields are only checked when paying by card.
pub fn validate_checkout(form: &CheckoutForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    errors.record(FIELD_GUEST_NAME, validate_guest_name(&form.guest_name));
    errors.record(FIELD_GUEST_EMAIL, validate_email(&form.guest_email));
    errors.record(FIELD_GUEST_PHONE, validate_phone(&form.guest_phone));

    if form.payment_method == PaymentMethod::Card {
        errors.record(FIELD_CARD_NUMBER, validate_card_number(&form.card_number));
        errors.record(FIELD_EXPIRY_DATE, validate_expiry(&form.expiry_date));
        errors.record(FIELD_CVC, validate_cvc(&form.cvc));
    }

    errors
}

// =============================================================================
// Stay Dates
// =============================================================================

/// Date-picker rules: check-in on a day after `today`, check-out after check-in.
///
/// Any moment today is already earlier than "now", so today itself is not
/// offered for check-in.
pub fn validate_stay_dates(
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    today: NaiveDate,
) -> CoreResult<()> {
    if check_in.date_naive() <= today {
        return Err(CoreError::CheckInTooEarly { check_in });
    }

    if check_out <= check_in {
        return Err(CoreError::InvalidDateRange {
            check_in,
            check_out,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            guest_name: "Ada Lovelace".to_string(),
            guest_email: "ada@example.com".to_string(),
            guest_phone: "555-0100".to_string(),
            payment_method: PaymentMethod::Card,
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "12/29".to_string(),
            cvc: "123".to_string(),
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());

        assert_eq!(
            validate_email("abc"),
            Err(ValidationError::invalid("email address"))
        );
        assert!(validate_email("a@b").is_err());
        assert_eq!(validate_email("   "), Err(ValidationError::required("Email")));
    }

    #[test]
    fn test_validate_card_number() {
        assert!(validate_card_number("4242 4242 4242 4242").is_ok());
        assert!(validate_card_number("4242424242424").is_ok()); // 13 digits

        assert!(validate_card_number("123").is_err());
        assert!(validate_card_number("4242 4242 4242").is_err()); // 12 digits
        assert!(validate_card_number("4242-4242-4242-4242").is_err());
        assert_eq!(
            validate_card_number(""),
            Err(ValidationError::required("Card number"))
        );
    }

    #[test]
    fn test_validate_expiry() {
        assert!(validate_expiry("12/29").is_ok());
        assert!(validate_expiry("1229").is_err());
        assert!(validate_expiry("1/29").is_err());
        assert!(validate_expiry("12/2029").is_err());
    }

    #[test]
    fn test_validate_cvc() {
        assert!(validate_cvc("123").is_ok());
        assert!(validate_cvc("1234").is_ok());
        assert!(validate_cvc("12").is_err());
        assert!(validate_cvc("12a").is_err());
        assert!(validate_cvc("").is_err());
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate_checkout(&CheckoutForm::default());

        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(FIELD_GUEST_NAME), Some("Full name is required"));
        assert_eq!(errors.get(FIELD_GUEST_EMAIL), Some("Email is required"));
        assert_eq!(errors.get(FIELD_GUEST_PHONE), Some("Phone number is required"));
        assert_eq!(errors.get(FIELD_CARD_NUMBER), Some("Card number is required"));
        assert_eq!(errors.get(FIELD_EXPIRY_DATE), Some("Expiry date is required"));
        assert_eq!(errors.get(FIELD_CVC), Some("CVC is required"));
    }

    #[test]
    fn test_malformed_fields_get_format_messages() {
        let form = CheckoutForm {
            guest_email: "abc".to_string(),
            card_number: "123".to_string(),
            expiry_date: "1229".to_string(),
            cvc: "1".to_string(),
            ..valid_form()
        };
        let errors = form.validate();

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![FIELD_CARD_NUMBER, FIELD_CVC, FIELD_EXPIRY_DATE, FIELD_GUEST_EMAIL]
        );
        assert_eq!(
            errors.get(FIELD_GUEST_EMAIL),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.get(FIELD_EXPIRY_DATE),
            Some("Please enter a valid expiry date (MM/YY)")
        );
    }

    #[test]
    fn test_paypal_skips_card_fields() {
        let form = CheckoutForm {
            payment_method: PaymentMethod::PayPal,
            card_number: String::new(),
            expiry_date: String::new(),
            cvc: String::new(),
            ..valid_form()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_field_errors_serialize_as_flat_map() {
        let errors = CheckoutForm {
            guest_name: " ".to_string(),
            ..valid_form()
        }
        .validate();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "guestName": "Full name is required" }));
    }

    #[test]
    fn test_validate_stay_dates() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let day = |d: u32| start_of_day(NaiveDate::from_ymd_opt(2025, 6, d).unwrap());
        let yesterday = start_of_day(NaiveDate::from_ymd_opt(2025, 5, 31).unwrap());

        assert!(validate_stay_dates(day(2), day(4), today).is_ok());
        assert!(matches!(
            validate_stay_dates(yesterday, day(4), today),
            Err(CoreError::CheckInTooEarly { .. })
        ));
        assert!(matches!(
            validate_stay_dates(day(4), day(4), today),
            Err(CoreError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_check_in_today_is_too_early() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let check_out = start_of_day(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());

        assert!(matches!(
            validate_stay_dates(start_of_day(today), check_out, today),
            Err(CoreError::CheckInTooEarly { .. })
        ));

        let afternoon = start_of_day(today) + chrono::Duration::hours(15);
        assert!(validate_stay_dates(afternoon, check_out, today).is_err());
    }
}
