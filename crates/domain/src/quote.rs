//! Quotes produced for a single user action.
//!
//! Quotes are derived values: recomputed whenever the input or the reserve
//! snapshot changes, never persisted. Amount fields are exact; the
//! `*_percent` fields are display values only.

use crate::call::DexCall;
use crate::pool::SwapDirection;
use crate::token::{Token, TokenAmount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapQuote {
    pub token_in: Token,
    pub token_out: Token,
    pub direction: SwapDirection,
    pub amount_in: TokenAmount,
    pub amount_out: TokenAmount,
    pub price_impact_percent: f64,
    pub fee_amount: TokenAmount,
    pub min_amount_out: TokenAmount,
}

impl SwapQuote {
    /// A swap can be submitted only if it moves tokens both ways.
    pub fn is_executable(&self) -> bool {
        !self.amount_in.is_zero() && !self.amount_out.is_zero()
    }

    pub fn to_call(&self) -> Option<DexCall> {
        if !self.is_executable() {
            return None;
        }
        let (amount_in, min_amount_out) = (self.amount_in, self.min_amount_out);
        Some(match self.direction {
            SwapDirection::AToB => DexCall::SwapAForB {
                amount_in,
                min_amount_out,
            },
            SwapDirection::BToA => DexCall::SwapBForA {
                amount_in,
                min_amount_out,
            },
        })
    }
}

/// A swap sized to deliver a requested output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExactOutputQuote {
    pub requested_out: TokenAmount,
    /// Input that delivers at least `requested_out` at current reserves.
    pub swap: SwapQuote,
    /// Upper bound on the input the user should be willing to spend.
    pub max_amount_in: TokenAmount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityQuote {
    pub token_a: Token,
    pub token_b: Token,
    pub desired_a: TokenAmount,
    pub desired_b: TokenAmount,
    /// Deposit after the pool-ratio adjustment.
    pub amount_a: TokenAmount,
    pub amount_b: TokenAmount,
    pub lp_tokens_minted: TokenAmount,
    /// Share of the pool held by the minted tokens once the deposit lands.
    pub share_of_pool_percent: f64,
    pub is_first_deposit: bool,
}

impl LiquidityQuote {
    /// True when the ratio rule reduced one side below the desired amount.
    ///
    /// Callers must show the adjusted amounts before submission.
    pub fn was_adjusted(&self) -> bool {
        self.amount_a != self.desired_a || self.amount_b != self.desired_b
    }

    pub fn to_call(&self) -> Option<DexCall> {
        if self.amount_a.is_zero() || self.amount_b.is_zero() || self.lp_tokens_minted.is_zero() {
            return None;
        }
        Some(DexCall::AddLiquidity {
            amount_a: self.amount_a,
            amount_b: self.amount_b,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovalQuote {
    pub lp_tokens: TokenAmount,
    pub amount_a: TokenAmount,
    pub amount_b: TokenAmount,
    pub min_amount_a: TokenAmount,
    pub min_amount_b: TokenAmount,
    /// Share of the pool being redeemed.
    pub share_of_pool_percent: f64,
}

impl RemovalQuote {
    pub fn to_call(&self) -> Option<DexCall> {
        if self.lp_tokens.is_zero() {
            return None;
        }
        Some(DexCall::RemoveLiquidity {
            lp_amount: self.lp_tokens,
        })
    }
}
