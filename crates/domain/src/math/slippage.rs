use crate::error::DomainError;
use crate::math::narrow;
use crate::token::TokenAmount;
use primitive_types::{U256, U512};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Slippage tolerance in basis points (50 = 0.5%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlippageTolerance {
    bps: u32,
}

impl SlippageTolerance {
    /// Basis-point scale of the tolerance.
    pub const DENOMINATOR: u32 = 10_000;

    /// Builds a tolerance from basis points.
    pub fn from_bps(bps: u32) -> Self {
        Self { bps }
    }

    /// Builds a tolerance from a percentage such as `0.5`, truncating below
    /// one basis point.
    pub fn from_percent(percent: Decimal) -> Result<Self, DomainError> {
        if percent.is_sign_negative() {
            return Err(DomainError::DecimalConversion(format!(
                "negative slippage tolerance: {percent}"
            )));
        }
        (percent * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u32()
            .map(Self::from_bps)
            .ok_or_else(|| DomainError::DecimalConversion(percent.to_string()))
    }

    /// The tolerance in basis points.
    pub fn bps(&self) -> u32 {
        self.bps
    }

    /// The tolerance as a percentage, e.g. `0.5`.
    pub fn as_percent(&self) -> Decimal {
        Decimal::new(i64::from(self.bps), 2)
    }
}

impl Default for SlippageTolerance {
    fn default() -> Self {
        Self::from_bps(50)
    }
}

/// Lowest acceptable output: `amount_out * (10000 - bps) / 10000`, truncated.
///
/// A tolerance above 100% yields zero.
pub fn min_amount_out(amount_out: TokenAmount, tolerance: SlippageTolerance) -> TokenAmount {
    let factor = SlippageTolerance::DENOMINATOR.saturating_sub(tolerance.bps);
    let scaled = amount_out.0.full_mul(U256::from(factor));
    TokenAmount(narrow(scaled / U512::from(SlippageTolerance::DENOMINATOR)))
}

/// Highest acceptable input: `amount_in * (10000 + bps) / 10000`, rounded up.
pub fn max_amount_in(amount_in: TokenAmount, tolerance: SlippageTolerance) -> TokenAmount {
    let factor = U256::from(SlippageTolerance::DENOMINATOR) + U256::from(tolerance.bps);
    let denominator = U512::from(SlippageTolerance::DENOMINATOR);
    let scaled = amount_in.0.full_mul(factor);
    TokenAmount(narrow((scaled + denominator - U512::one()) / denominator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_min_amount_out() {
        let min = min_amount_out(TokenAmount::from(1000u64), SlippageTolerance::from_bps(50));
        assert_eq!(min, TokenAmount::from(995u64));

        let min = min_amount_out(TokenAmount::from(999u64), SlippageTolerance::default());
        // 999 * 9950 / 10000 = 994.005 -> 994
        assert_eq!(min, TokenAmount::from(994u64));
    }

    #[test]
    fn test_tolerance_above_full_range_saturates() {
        let min = min_amount_out(TokenAmount::from(1000u64), SlippageTolerance::from_bps(20_000));
        assert!(min.is_zero());
    }

    #[test]
    fn test_max_amount_in_rounds_up() {
        let max = max_amount_in(TokenAmount::from(1000u64), SlippageTolerance::from_bps(50));
        assert_eq!(max, TokenAmount::from(1005u64));
        let max = max_amount_in(TokenAmount::from(1u64), SlippageTolerance::from_bps(50));
        assert_eq!(max, TokenAmount::from(2u64));
    }

    #[test]
    fn test_tolerance_from_percent() {
        let tolerance = SlippageTolerance::from_percent(dec!(0.5)).unwrap();
        assert_eq!(tolerance, SlippageTolerance::default());
        assert_eq!(tolerance.as_percent(), dec!(0.5));
        assert_eq!(SlippageTolerance::from_percent(dec!(1.234)).unwrap().bps(), 123);
        assert!(SlippageTolerance::from_percent(dec!(-0.1)).is_err());
    }
}
