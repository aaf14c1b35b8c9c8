//! Input masks applied to checkout fields as the guest types.

/// Groups a card number into blocks of four, dropping anything that is not a digit.
///
/// Fewer than four digits are returned unchanged; more than sixteen are cut off.
///
/// ## Example
/// ```rust
/// use resort_core::input::format_card_number;
///
/// assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
/// assert_eq!(format_card_number("42"), "42");
/// ```
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return digits.into_iter().collect();
    }

    digits
        .chunks(4)
        .take(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inserts the slash of `MM/YY` once two digits have been typed.
///
/// ## Example
/// ```rust
/// use resort_core::input::format_expiry;
///
/// assert_eq!(format_expiry("1229"), "12/29");
/// assert_eq!(format_expiry("1"), "1");
/// ```
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 2 {
        return digits;
    }

    let month = &digits[..2];
    let year: String = digits[2..].chars().take(2).collect();
    format!("{month}/{year}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_card_number, validate_expiry};

    #[test]
    fn test_card_number_mask() {
        assert_eq!(format_card_number("4242 4242-4242x4242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("42424"), "4242 4");
        assert_eq!(format_card_number("42424242424242429999"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("ab1"), "1");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_expiry_mask() {
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("12/2"), "12/2");
        assert_eq!(format_expiry("12/29"), "12/29");
        assert_eq!(format_expiry("122999"), "12/29");
    }

    #[test]
    fn test_masked_values_pass_validation() {
        assert!(validate_card_number(&format_card_number("4242424242424242")).is_ok());
        assert!(validate_expiry(&format_expiry("1229")).is_ok());
    }
}
