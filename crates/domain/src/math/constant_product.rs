use crate::error::DomainError;
use crate::fees::FeeRate;
use crate::math::{narrow, u512_to_f64};
use crate::token::TokenAmount;
use primitive_types::{U256, U512};

const IMPACT_SCALE: u64 = 1_000_000_000_000_000_000;

/// Input left after the fee: `amount_in * (1000 - fee) / 1000`, truncated.
fn effective_input(amount_in: U256, fee: FeeRate) -> U256 {
    let scaled = amount_in.full_mul(U256::from(fee.retained_factor()));
    narrow(scaled / U512::from(FeeRate::DENOMINATOR))
}

/// Calculates the output amount for a given input amount in a constant product pool (x * y = k).
///
/// formula: dy = y * dx' / (x + dx'), where dx' = dx * (1000 - fee) / 1000
///
/// Returns zero for a zero input or an unseeded pool. The result is always
/// strictly below `reserve_out`.
pub fn quote_swap_output(
    amount_in: TokenAmount,
    reserve_in: TokenAmount,
    reserve_out: TokenAmount,
    fee: FeeRate,
) -> TokenAmount {
    if amount_in.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
        return TokenAmount::zero();
    }

    let amount_in_with_fee = effective_input(amount_in.0, fee);
    let numerator = amount_in_with_fee.full_mul(reserve_out.0);
    let denominator = U512::from(reserve_in.0) + U512::from(amount_in_with_fee);

    TokenAmount(narrow(numerator / denominator))
}

/// The part of `amount_in` retained by the pool as fee.
pub fn swap_fee(amount_in: TokenAmount, fee: FeeRate) -> TokenAmount {
    TokenAmount(amount_in.0 - effective_input(amount_in.0, fee))
}

/// Relative change of the spot price `reserve_out / reserve_in` once
/// `amount_in` enters and `amount_out` leaves the pool, as a percentage
/// capped at 100.
///
/// Display-only: the value is derived from an 18-digit fixed-point ratio and
/// never feeds a transaction argument.
pub fn spot_price_change_percent(
    amount_in: TokenAmount,
    amount_out: TokenAmount,
    reserve_in: TokenAmount,
    reserve_out: TokenAmount,
) -> f64 {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return 0.0;
    }
    if amount_out >= reserve_out {
        return 100.0;
    }

    let scale = U256::from(IMPACT_SCALE);
    // price_after / price_before = (r_out - out) / r_out * r_in / (r_in + in)
    let out_ratio = narrow(
        (reserve_out.0 - amount_out.0).full_mul(scale) / U512::from(reserve_out.0),
    );
    let in_ratio = narrow(
        reserve_in.0.full_mul(scale) / (U512::from(reserve_in.0) + U512::from(amount_in.0)),
    );
    let ratio = out_ratio.full_mul(in_ratio) / U512::from(scale);
    let change = U512::from(scale) - ratio.min(U512::from(scale));

    let percent = u512_to_f64(change) * 100.0 / IMPACT_SCALE as f64;
    percent.min(100.0)
}

/// Price impact of swapping `amount_in` at the given fee, in percent.
///
/// Zero when the pool is unseeded or the trade produces no output.
pub fn quote_price_impact(
    amount_in: TokenAmount,
    reserve_in: TokenAmount,
    reserve_out: TokenAmount,
    fee: FeeRate,
) -> f64 {
    let amount_out = quote_swap_output(amount_in, reserve_in, reserve_out, fee);
    if amount_out.is_zero() {
        return 0.0;
    }
    spot_price_change_percent(amount_in, amount_out, reserve_in, reserve_out)
}

/// Smallest input for which [`quote_swap_output`] yields at least `amount_out`.
///
/// Both rounding steps of the forward formula are inverted with ceiling
/// division, so one unit less of input always falls short.
pub fn quote_swap_input(
    amount_out: TokenAmount,
    reserve_in: TokenAmount,
    reserve_out: TokenAmount,
    fee: FeeRate,
) -> Result<TokenAmount, DomainError> {
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(DomainError::InsufficientLiquidity);
    }
    if amount_out.is_zero() {
        return Ok(TokenAmount::zero());
    }
    let retained = fee.retained_factor();
    if retained == 0 {
        return Err(DomainError::FeeConsumesInput);
    }

    let remaining = U512::from(reserve_out.0 - amount_out.0);
    let numerator = amount_out.0.full_mul(reserve_in.0);
    let effective = (numerator + remaining - U512::one()) / remaining;
    let effective = U256::try_from(effective).map_err(|_| DomainError::AmountOverflow)?;

    let retained = U512::from(retained);
    let scaled = effective.full_mul(U256::from(FeeRate::DENOMINATOR));
    let amount_in = (scaled + retained - U512::one()) / retained;
    U256::try_from(amount_in)
        .map(TokenAmount)
        .map_err(|_| DomainError::AmountOverflow)
}

/// Calculates the constant product K
pub fn calculate_k(reserve0: TokenAmount, reserve1: TokenAmount) -> U512 {
    reserve0.0.full_mul(reserve1.0)
}
