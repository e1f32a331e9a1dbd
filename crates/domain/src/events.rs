//! Analysis of pool events observed on chain.
//!
//! Event data carries raw amounts only. Price impact and pool share are
//! measured against the reserves and LP supply observed around the event,
//! never against an assumed exchange rate.

use crate::math::constant_product::spot_price_change_percent;
use crate::math::liquidity::pool_share;
use crate::math::mul_div;
use crate::pool::{ReserveState, SwapDirection};
use crate::token::TokenAmount;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Amounts emitted by a `Swap` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapEvent {
    pub amount_a_in: TokenAmount,
    pub amount_b_in: TokenAmount,
    pub amount_a_out: TokenAmount,
    pub amount_b_out: TokenAmount,
}

impl SwapEvent {
    /// A positive token A input marks an A-to-B swap.
    pub fn direction(&self) -> SwapDirection {
        if self.amount_a_in.is_zero() {
            SwapDirection::BToA
        } else {
            SwapDirection::AToB
        }
    }

    /// `(amount_in, amount_out)` along the swap direction.
    pub fn amounts(&self) -> (TokenAmount, TokenAmount) {
        match self.direction() {
            SwapDirection::AToB => (self.amount_a_in, self.amount_b_out),
            SwapDirection::BToA => (self.amount_b_in, self.amount_a_out),
        }
    }

    /// Spot price movement caused by the swap, in percent.
    ///
    /// `reserves_before` is the snapshot preceding the event.
    pub fn price_impact_percent(&self, reserves_before: &ReserveState) -> f64 {
        let (amount_in, amount_out) = self.amounts();
        let (reserve_in, reserve_out) = reserves_before.reserves_for(self.direction());
        spot_price_change_percent(amount_in, amount_out, reserve_in, reserve_out)
    }

    /// Traded volume expressed in token B at the pre-trade spot price.
    pub fn volume_in_b(&self, reserves_before: &ReserveState) -> TokenAmount {
        match self.direction() {
            SwapDirection::BToA => self.amount_b_in,
            SwapDirection::AToB if reserves_before.reserve_a.is_zero() => TokenAmount::zero(),
            SwapDirection::AToB => TokenAmount(
                mul_div(
                    self.amount_a_in.0,
                    reserves_before.reserve_b.0,
                    reserves_before.reserve_a.0,
                )
                .unwrap_or(U256::MAX),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiquidityEventKind {
    Add,
    Remove,
}

/// Amounts emitted by a `LiquidityAdded` or `LiquidityRemoved` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityEvent {
    pub kind: LiquidityEventKind,
    pub amount_a: TokenAmount,
    pub amount_b: TokenAmount,
    /// LP tokens minted or burned.
    pub liquidity: TokenAmount,
}

impl LiquidityEvent {
    /// Share of the pool the event's LP tokens represent, in percent.
    ///
    /// Minted tokens are measured against the supply after the deposit,
    /// burned tokens against the supply before the withdrawal.
    pub fn share_of_pool_percent(&self, supply_before: TokenAmount) -> f64 {
        let reference = match self.kind {
            LiquidityEventKind::Add => supply_before.0.saturating_add(self.liquidity.0),
            LiquidityEventKind::Remove => supply_before.0,
        };
        pool_share(self.liquidity, TokenAmount(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserves() -> ReserveState {
        ReserveState::new(
            TokenAmount::from(1_000_000u64),
            TokenAmount::from(2_000_000u64),
            TokenAmount::from(1_414_213u64),
        )
        .unwrap()
    }

    #[test]
    fn test_swap_event_direction_and_amounts() {
        let event = SwapEvent {
            amount_a_in: TokenAmount::zero(),
            amount_b_in: TokenAmount::from(2_000u64),
            amount_a_out: TokenAmount::from(996u64),
            amount_b_out: TokenAmount::zero(),
        };
        assert_eq!(event.direction(), SwapDirection::BToA);
        assert_eq!(event.amounts(), (TokenAmount::from(2_000u64), TokenAmount::from(996u64)));
        assert_eq!(event.volume_in_b(&reserves()), TokenAmount::from(2_000u64));
    }

    #[test]
    fn test_swap_event_impact_uses_live_reserves() {
        let event = SwapEvent {
            amount_a_in: TokenAmount::from(10_000u64),
            amount_b_in: TokenAmount::zero(),
            amount_a_out: TokenAmount::zero(),
            amount_b_out: TokenAmount::from(19_743u64),
        };
        let impact = event.price_impact_percent(&reserves());
        // (1 - (1_980_257 / 2_000_000) * (1_000_000 / 1_010_000)) * 100
        assert!((impact - 1.9675).abs() < 0.001, "impact = {impact}");
        assert_eq!(event.volume_in_b(&reserves()), TokenAmount::from(20_000u64));
    }

    #[test]
    fn test_liquidity_event_share() {
        let add = LiquidityEvent {
            kind: LiquidityEventKind::Add,
            amount_a: TokenAmount::from(100u64),
            amount_b: TokenAmount::from(200u64),
            liquidity: TokenAmount::from(100u64),
        };
        assert_eq!(add.share_of_pool_percent(TokenAmount::from(300u64)), 25.0);

        let remove = LiquidityEvent {
            kind: LiquidityEventKind::Remove,
            ..add
        };
        assert_eq!(remove.share_of_pool_percent(TokenAmount::from(400u64)), 25.0);
        assert_eq!(remove.share_of_pool_percent(TokenAmount::zero()), 0.0);
    }
}
