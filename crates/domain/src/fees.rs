use crate::error::DomainError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Trading fee in tenths of a percent (3 = 0.3%).
///
/// The fee is applied as `(1000 - permille) / 1000` on the input amount so
/// quoting never touches floating point.
///
/// Deserialization rejects values above 100%, so every `FeeRate` in
/// circulation satisfies `permille <= DENOMINATOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawFeeRate")]
pub struct FeeRate {
    permille: u32,
}

/// Wire shape of a `FeeRate`, checked before it becomes one.
#[derive(Deserialize)]
struct RawFeeRate {
    permille: u32,
}

impl TryFrom<RawFeeRate> for FeeRate {
    type Error = DomainError;

    fn try_from(raw: RawFeeRate) -> Result<Self, Self::Error> {
        if raw.permille > Self::DENOMINATOR {
            return Err(DomainError::DecimalConversion(format!(
                "fee above 100%: {} permille",
                raw.permille
            )));
        }
        Ok(Self::from_permille(raw.permille))
    }
}

impl FeeRate {
    /// Per-mille scale of the fee.
    pub const DENOMINATOR: u32 = 1000;

    /// Builds a fee from tenths of a percent, capped at 100%.
    pub fn from_permille(permille: u32) -> Self {
        Self {
            permille: permille.min(Self::DENOMINATOR),
        }
    }

    /// Builds a fee from a percentage such as `0.3`.
    ///
    /// Precision finer than a tenth of a percent is truncated, matching the
    /// `1000 - fee * 10` factor used by the pool contract.
    pub fn from_percent(percent: Decimal) -> Result<Self, DomainError> {
        if percent.is_sign_negative() || percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::DecimalConversion(format!(
                "fee percent out of range: {percent}"
            )));
        }
        let permille = (percent * Decimal::TEN)
            .trunc()
            .to_u32()
            .ok_or_else(|| DomainError::DecimalConversion(percent.to_string()))?;
        Ok(Self::from_permille(permille))
    }

    /// The fee in tenths of a percent.
    pub fn permille(&self) -> u32 {
        self.permille
    }

    /// Multiplier numerator applied to the input, e.g. 997 for 0.3%.
    pub fn retained_factor(&self) -> u32 {
        Self::DENOMINATOR.saturating_sub(self.permille)
    }

    /// The fee as a percentage, e.g. `0.3`.
    pub fn as_percent(&self) -> Decimal {
        Decimal::new(i64::from(self.permille), 1)
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::from_permille(3)
    }
}
