use crate::error::DomainError;
use crate::math::fixed_point::format_amount;
use crate::pool::ReserveState;
use crate::token::TokenAmount;
use rust_decimal::Decimal;
use std::str::FromStr;

/// `Decimal` keeps at most 28 fractional digits.
const MAX_DECIMAL_SCALE: u8 = 28;

/// Converts raw units into a human-scale `Decimal`.
pub fn to_decimal(amount: TokenAmount, decimals: u8) -> Result<Decimal, DomainError> {
    let text = format_amount(amount, decimals, decimals.min(MAX_DECIMAL_SCALE));
    Decimal::from_str(&text).map_err(|e| DomainError::DecimalConversion(e.to_string()))
}

/// Spot price of one whole token A in token B, zero for an unseeded pool.
pub fn spot_price(
    reserves: &ReserveState,
    decimals_a: u8,
    decimals_b: u8,
) -> Result<Decimal, DomainError> {
    if !reserves.is_seeded() {
        return Ok(Decimal::ZERO);
    }
    let reserve_a = to_decimal(reserves.reserve_a, decimals_a)?;
    let reserve_b = to_decimal(reserves.reserve_b, decimals_b)?;
    reserve_b
        .checked_div(reserve_a)
        .ok_or_else(|| DomainError::DecimalConversion("spot price overflow".to_string()))
}

/// Total pool value denominated in token B at the current spot price.
pub fn pool_value_in_b(
    reserves: &ReserveState,
    decimals_a: u8,
    decimals_b: u8,
) -> Result<Decimal, DomainError> {
    let price = spot_price(reserves, decimals_a, decimals_b)?;
    let reserve_a = to_decimal(reserves.reserve_a, decimals_a)?;
    let reserve_b = to_decimal(reserves.reserve_b, decimals_b)?;
    reserve_a
        .checked_mul(price)
        .and_then(|value_a| value_a.checked_add(reserve_b))
        .ok_or_else(|| DomainError::DecimalConversion("pool value overflow".to_string()))
}

/// Value of `amount` at an external per-token price.
pub fn usd_value(
    amount: TokenAmount,
    decimals: u8,
    price_per_token: Decimal,
) -> Result<Decimal, DomainError> {
    to_decimal(amount, decimals)?
        .checked_mul(price_per_token)
        .ok_or_else(|| DomainError::DecimalConversion("value overflow".to_string()))
}
