//! Exact integer AMM math.
//!
//! Every product of two 256-bit values is taken in `U512`, so no quote can
//! silently wrap. Floating point appears only in the `*_percent` display
//! helpers.

pub mod constant_product;
pub mod fixed_point;
pub mod liquidity;
pub mod slippage;
pub mod sqrt;

use primitive_types::{U256, U512};

/// Scale used for display ratios: 18 fractional digits.
const RATIO_SCALE: u64 = 1_000_000_000_000_000_000;

/// `a * b / denominator` with a 512-bit intermediate.
///
/// Returns `None` when `denominator` is zero or the quotient needs more than
/// 256 bits.
pub(crate) fn mul_div(a: U256, b: U256, denominator: U256) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let quotient = a.full_mul(b) / U512::from(denominator);
    U256::try_from(quotient).ok()
}

/// Narrows a value known to be bounded by a 256-bit operand.
pub(crate) fn narrow(value: U512) -> U256 {
    U256::try_from(value).unwrap_or(U256::MAX)
}

/// Lossy conversion for display values.
pub(crate) fn u512_to_f64(value: U512) -> f64 {
    value
        .0
        .iter()
        .rev()
        .fold(0.0, |acc, limb| acc * 18_446_744_073_709_551_616.0 + *limb as f64)
}

/// `numerator / denominator * 100` as a display percentage, `0` when the
/// denominator is zero.
pub(crate) fn ratio_percent(numerator: U256, denominator: U256) -> f64 {
    if denominator.is_zero() {
        return 0.0;
    }
    let scaled = numerator.full_mul(U256::from(RATIO_SCALE) * U256::from(100u8))
        / U512::from(denominator);
    u512_to_f64(scaled) / RATIO_SCALE as f64
}
