use crate::token::TokenAmount;
use serde::{Deserialize, Serialize};

/// Arguments for one pool contract call, handed to the transaction submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DexCall {
    SwapAForB {
        amount_in: TokenAmount,
        min_amount_out: TokenAmount,
    },
    SwapBForA {
        amount_in: TokenAmount,
        min_amount_out: TokenAmount,
    },
    AddLiquidity {
        amount_a: TokenAmount,
        amount_b: TokenAmount,
    },
    RemoveLiquidity {
        lp_amount: TokenAmount,
    },
}

impl DexCall {
    /// Contract function name.
    pub fn function_name(&self) -> &'static str {
        match self {
            Self::SwapAForB { .. } => "swapAforB",
            Self::SwapBForA { .. } => "swapBforA",
            Self::AddLiquidity { .. } => "addLiquidity",
            Self::RemoveLiquidity { .. } => "removeLiquidity",
        }
    }

    /// Positional arguments in contract order.
    pub fn args(&self) -> Vec<TokenAmount> {
        match *self {
            Self::SwapAForB {
                amount_in,
                min_amount_out,
            }
            | Self::SwapBForA {
                amount_in,
                min_amount_out,
            } => vec![amount_in, min_amount_out],
            Self::AddLiquidity { amount_a, amount_b } => vec![amount_a, amount_b],
            Self::RemoveLiquidity { lp_amount } => vec![lp_amount],
        }
    }
}
