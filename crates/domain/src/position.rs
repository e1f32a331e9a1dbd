use crate::math::liquidity::{pool_share, redeem_lp_tokens};
use crate::pool::ReserveState;
use crate::token::TokenAmount;
use serde::{Deserialize, Serialize};

/// What an LP balance is worth against a reserve snapshot.
///
/// A pure view: recomputed on demand, owned by nobody.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPosition {
    pub lp_token_balance: TokenAmount,
    pub share_of_pool_percent: f64,
    pub underlying_amount_a: TokenAmount,
    pub underlying_amount_b: TokenAmount,
}

impl UserPosition {
    pub fn from_reserves(lp_token_balance: TokenAmount, reserves: &ReserveState) -> Self {
        if lp_token_balance.is_zero() || reserves.total_lp_supply.is_zero() {
            return Self::empty();
        }
        let (underlying_amount_a, underlying_amount_b) = redeem_lp_tokens(
            lp_token_balance,
            reserves.reserve_a,
            reserves.reserve_b,
            reserves.total_lp_supply,
        );
        Self {
            lp_token_balance,
            share_of_pool_percent: pool_share(lp_token_balance, reserves.total_lp_supply),
            underlying_amount_a,
            underlying_amount_b,
        }
    }

    pub fn empty() -> Self {
        Self {
            lp_token_balance: TokenAmount::zero(),
            share_of_pool_percent: 0.0,
            underlying_amount_a: TokenAmount::zero(),
            underlying_amount_b: TokenAmount::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_reserves() {
        let reserves = ReserveState::new(
            TokenAmount::from(1000u64),
            TokenAmount::from(2000u64),
            TokenAmount::from(1000u64),
        )
        .unwrap();
        let position = UserPosition::from_reserves(TokenAmount::from(250u64), &reserves);
        assert_eq!(position.share_of_pool_percent, 25.0);
        assert_eq!(position.underlying_amount_a, TokenAmount::from(250u64));
        assert_eq!(position.underlying_amount_b, TokenAmount::from(500u64));
    }

    #[test]
    fn test_position_in_empty_pool() {
        let position = UserPosition::from_reserves(TokenAmount::from(5u64), &ReserveState::empty());
        assert_eq!(position, UserPosition::empty());
    }
}
