use crate::error::DomainError;
use crate::math::sqrt::isqrt_wide;
use crate::math::{mul_div, ratio_percent};
use crate::token::TokenAmount;
use primitive_types::U256;

/// Clamps a desired deposit to the current pool ratio.
///
/// An unseeded pool accepts the desired amounts as-is, since the first
/// depositor sets the price. Otherwise the side that would over-supply is
/// reduced; neither returned amount exceeds its desired amount.
pub fn optimal_deposit_amounts(
    desired_a: TokenAmount,
    desired_b: TokenAmount,
    reserve_a: TokenAmount,
    reserve_b: TokenAmount,
) -> (TokenAmount, TokenAmount) {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return (desired_a, desired_b);
    }

    // An overflowing b_optimal is larger than any desired_b.
    match mul_div(desired_a.0, reserve_b.0, reserve_a.0) {
        Some(b_optimal) if b_optimal <= desired_b.0 => (desired_a, TokenAmount(b_optimal)),
        _ => {
            // desired_b * reserve_a / reserve_b < desired_a here, so it fits.
            let a_optimal = mul_div(desired_b.0, reserve_a.0, reserve_b.0).unwrap_or_default();
            (TokenAmount(a_optimal), desired_b)
        }
    }
}

/// Calculates the number of LP tokens minted for a deposit.
///
/// The first deposit mints the geometric mean `sqrt(a * b)`. Later deposits
/// mint the smaller of the two ratio-implied amounts, so an unbalanced
/// deposit is credited only for its scarcer side.
pub fn mint_lp_tokens(
    amount_a: TokenAmount,
    amount_b: TokenAmount,
    reserve_a: TokenAmount,
    reserve_b: TokenAmount,
    total_supply: TokenAmount,
) -> Result<TokenAmount, DomainError> {
    if total_supply.is_zero() {
        return Ok(TokenAmount(isqrt_wide(amount_a.0.full_mul(amount_b.0))));
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(DomainError::InconsistentReserves {
            reserve_a: reserve_a.0,
            reserve_b: reserve_b.0,
            total_supply: total_supply.0,
        });
    }

    let from_a = mul_div(amount_a.0, total_supply.0, reserve_a.0);
    let from_b = mul_div(amount_b.0, total_supply.0, reserve_b.0);
    match (from_a, from_b) {
        (Some(a), Some(b)) => Ok(TokenAmount(a.min(b))),
        (Some(v), None) | (None, Some(v)) => Ok(TokenAmount(v)),
        (None, None) => Err(DomainError::AmountOverflow),
    }
}

/// Token amounts released by burning `lp_tokens`.
///
/// Returns `(0, 0)` for a pool without LP supply.
pub fn redeem_lp_tokens(
    lp_tokens: TokenAmount,
    reserve_a: TokenAmount,
    reserve_b: TokenAmount,
    total_supply: TokenAmount,
) -> (TokenAmount, TokenAmount) {
    if total_supply.is_zero() {
        return (TokenAmount::zero(), TokenAmount::zero());
    }
    let lp = lp_tokens.0;
    let amount_a = mul_div(lp, reserve_a.0, total_supply.0).unwrap_or(U256::MAX);
    let amount_b = mul_div(lp, reserve_b.0, total_supply.0).unwrap_or(U256::MAX);
    (TokenAmount(amount_a), TokenAmount(amount_b))
}

/// Share of the pool held by `lp_tokens`, in percent.
pub fn pool_share(lp_tokens: TokenAmount, total_supply: TokenAmount) -> f64 {
    ratio_percent(lp_tokens.0, total_supply.0)
}
