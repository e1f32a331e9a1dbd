use crate::fees::FeeRate;
use rust_decimal::Decimal;

/// Annualised fee yield for liquidity providers, in percent.
///
/// `daily_volume` and `total_liquidity` must share a unit (e.g. USD).
/// Returns zero for an empty pool.
pub fn calculate_apr(total_liquidity: Decimal, daily_volume: Decimal, fee: FeeRate) -> Decimal {
    if total_liquidity.is_zero() {
        return Decimal::ZERO;
    }

    let daily_fees = daily_volume * fee.as_percent() / Decimal::ONE_HUNDRED;
    let annual_fees = daily_fees * Decimal::from(365);

    annual_fees / total_liquidity * Decimal::ONE_HUNDRED
}
