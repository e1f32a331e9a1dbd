//! Conversion between decimal strings and raw token units.
//!
//! Both directions work on digit strings rather than `10^decimals`, so any
//! `u8` decimal count is handled without overflow and without floats.

use crate::error::DomainError;
use crate::token::TokenAmount;
use primitive_types::U256;

/// Parses a decimal string such as `"1.5"` into raw units.
///
/// The fraction is right-padded to `decimals` digits, and digits beyond
/// `decimals` are dropped (truncation toward zero). Empty input, `"0"` and
/// `"."` are zero.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<TokenAmount, DomainError> {
    if amount.is_empty() || amount == "0" || amount == "." {
        return Ok(TokenAmount::zero());
    }

    let (integer_part, fraction_part) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (amount, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer_part) || !all_digits(fraction_part) {
        return Err(DomainError::InvalidAmountFormat(amount.to_string()));
    }

    let decimals = usize::from(decimals);
    let mut digits = String::with_capacity(integer_part.len() + decimals);
    digits.push_str(integer_part);
    if fraction_part.len() >= decimals {
        digits.push_str(&fraction_part[..decimals]);
    } else {
        digits.push_str(fraction_part);
        digits.extend(std::iter::repeat_n('0', decimals - fraction_part.len()));
    }

    if digits.is_empty() {
        return Ok(TokenAmount::zero());
    }

    U256::from_dec_str(&digits)
        .map(TokenAmount)
        .map_err(|_| DomainError::AmountOverflow)
}

/// Formats raw units as a decimal string with at most `precision` fraction
/// digits.
///
/// The fraction is truncated, not rounded, and trailing zeros are removed;
/// an empty fraction prints the bare integer part.
pub fn format_amount(amount: TokenAmount, decimals: u8, precision: u8) -> String {
    let raw = amount.0.to_string();
    let decimals = usize::from(decimals);

    let (integer_part, fraction_part) = if raw.len() > decimals {
        let split = raw.len() - decimals;
        (raw[..split].to_string(), raw[split..].to_string())
    } else {
        let padded = format!("{raw:0>decimals$}");
        ("0".to_string(), padded)
    };

    let keep = usize::from(precision).min(fraction_part.len());
    let fraction = fraction_part[..keep].trim_end_matches('0');

    if fraction.is_empty() {
        integer_part
    } else {
        format!("{integer_part}.{fraction}")
    }
}
