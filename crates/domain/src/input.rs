//! Validation for raw amount text typed by a user.

use crate::math::fixed_point::parse_amount;
use crate::token::TokenAmount;

/// Digits with at most one decimal point. The empty string is accepted so a
/// cleared input field stays valid.
pub fn is_valid_numeric_input(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && value.bytes().filter(|b| *b == b'.').count() <= 1
}

/// Drops everything but digits and the first decimal point.
pub fn sanitize_numeric_input(value: &str) -> String {
    let mut seen_point = false;
    value
        .chars()
        .filter(|c| match c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// True when the text parses to a nonzero amount at `decimals`.
pub fn is_positive_amount(value: &str, decimals: u8) -> bool {
    parse_amount(value, decimals).is_ok_and(|amount| !amount.is_zero())
}

/// True when a valid positive amount is larger than `balance`.
///
/// Unparseable text never exceeds the balance; the form reports it as
/// invalid instead.
pub fn exceeds_balance(value: &str, balance: TokenAmount, decimals: u8) -> bool {
    parse_amount(value, decimals).is_ok_and(|amount| amount > balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_input_validation() {
        assert!(is_valid_numeric_input(""));
        assert!(is_valid_numeric_input("12.5"));
        assert!(is_valid_numeric_input(".5"));
        assert!(!is_valid_numeric_input("1.2.3"));
        assert!(!is_valid_numeric_input("1e5"));
    }

    #[test]
    fn test_sanitize_keeps_first_point() {
        assert_eq!(sanitize_numeric_input("$1,234.5.6"), "1234.56");
        assert_eq!(sanitize_numeric_input("abc"), "");
    }

    #[test]
    fn test_positive_amount() {
        assert!(is_positive_amount("0.000001", 6));
        assert!(!is_positive_amount("0.0000001", 6));
        assert!(!is_positive_amount("", 18));
        assert!(!is_positive_amount("x", 18));
    }

    #[test]
    fn test_exceeds_balance() {
        let balance = TokenAmount::from(1_500_000u64);
        assert!(exceeds_balance("1.6", balance, 6));
        assert!(!exceeds_balance("1.5", balance, 6));
        assert!(!exceeds_balance("oops", balance, 6));
    }
}
