//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use campswap_domain::prelude::*;
//! ```

// Values
pub use crate::call::DexCall;
pub use crate::error::DomainError;
pub use crate::fees::FeeRate;
pub use crate::math::slippage::SlippageTolerance;
pub use crate::pool::{ReserveState, SwapDirection};
pub use crate::position::UserPosition;
pub use crate::quote::{ExactOutputQuote, LiquidityQuote, RemovalQuote, SwapQuote};
pub use crate::token::{Token, TokenAmount};

// Math
pub use crate::math::constant_product::{
    quote_price_impact, quote_swap_input, quote_swap_output, swap_fee,
};
pub use crate::math::fixed_point::{format_amount, parse_amount};
pub use crate::math::liquidity::{
    mint_lp_tokens, optimal_deposit_amounts, pool_share, redeem_lp_tokens,
};
pub use crate::math::slippage::{max_amount_in, min_amount_out};
pub use crate::math::sqrt::isqrt;

// Events
pub use crate::events::{LiquidityEvent, LiquidityEventKind, SwapEvent};
